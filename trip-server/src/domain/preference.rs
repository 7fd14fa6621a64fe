//! User optimization preference.

use std::fmt;

/// Error returned when parsing an unknown preference string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference: {input}")]
pub struct InvalidPreference {
    input: String,
}

/// The axis a user wants a trip optimized for.
///
/// Drives tie-breaks in transport selection: the same distance can map to
/// different modes depending on whether the user wants the fastest,
/// cheapest or most comfortable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    #[default]
    Time,
    Cost,
    Comfort,
}

impl Preference {
    /// Parse a preference, case-insensitively.
    ///
    /// Older clients send "balanced" and "price"; those normalize to
    /// `Time` and `Cost` here at the boundary so the planner only ever
    /// sees the three canonical axes.
    pub fn parse(s: &str) -> Result<Self, InvalidPreference> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" | "balanced" => Ok(Preference::Time),
            "cost" | "price" => Ok(Preference::Cost),
            "comfort" => Ok(Preference::Comfort),
            _ => Err(InvalidPreference {
                input: s.to_string(),
            }),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Preference::Time => "time",
            Preference::Cost => "cost",
            Preference::Comfort => "comfort",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
