//! Domain errors

use thiserror::Error;

use crate::domain::OrderStatus;

/// Broad error classes. Validation errors are raised before any network
/// call; transport and rejected errors come back from the backend adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Rejected,
    Internal,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Component '{name}' is not offered under '{component_type}'")]
    UnknownComponent { component_type: String, name: String },

    #[error("Combo selection is incomplete: {0}")]
    InvalidSelection(String),

    #[error("Item not available: {0}")]
    ItemUnavailable(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Cart line not found: {0}")]
    LineNotFound(String),

    #[error("Cart line {0} does not hold a combo")]
    NotAComboLine(String),

    #[error("No space selected")]
    NoSpaceSelected,

    #[error("Space is occupied: {0}")]
    SpaceOccupied(String),

    #[error("Customer name is required")]
    BlankCustomerName,

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Order is already being submitted")]
    SubmissionInProgress,

    #[error("Cannot move order from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order {0} is closed")]
    OrderClosed(String),

    #[error("Invalid payment amount: {0}")]
    InvalidPaymentAmount(String),

    #[error("Payment method not available: {0}")]
    PaymentMethodUnavailable(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Transport(_) => ErrorKind::Transport,
            DomainError::Rejected { .. } => ErrorKind::Rejected,
            DomainError::Serialization(_) | DomainError::InternalError(_) => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    /// Only transport-class failures are worth repeating.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(DomainError::EmptyCart.kind(), ErrorKind::Validation);
        assert!(DomainError::Transport("timeout".into()).is_retryable());
        let rejected = DomainError::Rejected { status: 422, message: "bad space".into() };
        assert_eq!(rejected.kind(), ErrorKind::Rejected);
        assert!(!rejected.is_retryable());
        assert_eq!(rejected.to_string(), "Request rejected (422): bad space");
    }
}
