use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Shared error taxonomy for the domain types
// =============================================================================

/// Every rejected call on an `Order`, `Ticket`, `ShoppingCart`, `BankAccount`
/// or shape lands in one of these variants. Validation always runs before any
/// field is touched, so an `Err` means the receiver is exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Malformed input: blank names, bad lengths, zero identifiers.
    #[error("invalid argument '{param}': {message}")]
    InvalidArgument { param: &'static str, message: String },

    /// Numeric input outside its allowed bounds.
    #[error("'{param}' out of range: {message}")]
    OutOfRange { param: &'static str, message: String },

    /// The call is well-formed but the current state forbids it.
    #[error("{0}")]
    InvalidOperation(String),

    #[error("Insufficient funds. Balance: ${balance}, Requested: ${requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("Invalid amount: ${amount}. Amount must be positive.")]
    InvalidAmount { amount: Decimal },

    #[error("Account is locked: {reason}")]
    AccountLocked { reason: String },
}

impl DomainError {
    pub fn invalid_argument(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            message: message.into(),
        }
    }

    pub fn out_of_range(param: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            param,
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    /// True for both argument flavours (malformed and out-of-range).
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::OutOfRange { .. })
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;

/// Rejects empty and whitespace-only strings.
pub(crate) fn require_text(param: &'static str, value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            param,
            format!("{what} is required"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_argument_classification() {
        assert!(DomainError::invalid_argument("name", "x").is_argument_error());
        assert!(DomainError::out_of_range("price", "x").is_argument_error());
        assert!(!DomainError::invalid_operation("x").is_argument_error());
        assert!(DomainError::invalid_operation("x").is_invalid_operation());
    }

    #[test]
    fn test_contextual_messages() {
        let err = DomainError::InsufficientFunds {
            balance: dec!(1500),
            requested: dec!(2000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds. Balance: $1500, Requested: $2000"
        );

        let err = DomainError::AccountLocked {
            reason: "fraud detected".into(),
        };
        assert_eq!(err.to_string(), "Account is locked: fraud detected");
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Alice", "Name").is_ok());
        let err = require_text("name", "   ", "Name").unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_argument("name", "Name is required")
        );
    }
}
