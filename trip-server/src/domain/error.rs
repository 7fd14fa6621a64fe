//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from provider/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Trip has no legs
    #[error("trip must have at least one leg")]
    EmptyTrip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyTrip;
        assert_eq!(err.to_string(), "trip must have at least one leg");
    }
}
