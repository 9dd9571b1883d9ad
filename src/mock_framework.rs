//! # Mock Framework
//!
//! Utilities for testing code that talks to the inventory service without
//! spawning it.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then [`expect_request`] or [`expect_ship`] to assert what was sent
//! and reply however the test needs.

use tokio::sync::mpsc;

use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Next request sent by the client, if any.
pub async fn expect_request(receiver: &mut mpsc::Receiver<InventoryRequest>) -> Option<InventoryRequest> {
    receiver.recv().await
}

/// Helper to verify that the next message is a ShipProduct request
pub async fn expect_ship(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(u32, u32, ServiceResponse<Product, InventoryError>)> {
    match receiver.recv().await {
        Some(InventoryRequest::ShipProduct { id, quantity, respond_to }) => Some((id, quantity, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let ship_task = tokio::spawn(async move { client.ship_product(3, 100).await });

        let (id, quantity, responder) = expect_ship(&mut receiver).await.expect("Expected ShipProduct request");
        assert_eq!((id, quantity), (3, 100));
        responder
            .send(Err(InventoryError::InsufficientStock { requested: 100, available: 50 }))
            .unwrap();

        let result = ship_task.await.unwrap();
        assert_eq!(
            result,
            Err(InventoryError::InsufficientStock { requested: 100, available: 50 })
        );
    }
}
