use thiserror::Error;

/// Errors produced by inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(u32),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors raised while driving the interactive console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid choice: {0}")]
    InvalidSelection(String),
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("End of input")]
    EndOfInput,
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error")]
    Render(#[from] std::fmt::Error),
}

impl ConsoleError {
    /// Whether the menu loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ConsoleError::InvalidSelection(_) | ConsoleError::InvalidNumber(_) => true,
            ConsoleError::Inventory(InventoryError::ActorCommunicationError(_)) => false,
            ConsoleError::Inventory(_) => true,
            ConsoleError::EndOfInput | ConsoleError::Io(_) | ConsoleError::Render(_) => false,
        }
    }
}

/// Top-level failures surfaced by `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_errors_are_recoverable_except_communication() {
        assert!(ConsoleError::from(InventoryError::NotFound(99)).is_recoverable());
        assert!(ConsoleError::from(InventoryError::InsufficientStock { requested: 100, available: 5 })
            .is_recoverable());
        assert!(!ConsoleError::from(InventoryError::ActorCommunicationError("closed".into()))
            .is_recoverable());
        assert!(ConsoleError::InvalidSelection("9".into()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = InventoryError::InsufficientStock { requested: 100, available: 5 };
        assert_eq!(err.to_string(), "Insufficient stock: requested 100, available 5");
        assert_eq!(InventoryError::NotFound(99).to_string(), "Product not found: 99");
    }
}
