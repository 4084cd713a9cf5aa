use thiserror::Error;

/// Domain-level errors for monetary values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Amount is not a finite number")]
    NonFiniteAmount,
}
