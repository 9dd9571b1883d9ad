use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Product, ProfitLossReport, PurchaseRecord, StockBalance};
use crate::error::InventoryError;
use crate::messages::InventoryRequest;

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(InventoryClient => fn list_products() -> Vec<Product> as InventoryRequest::ListProducts, Error = InventoryError);
client_method!(InventoryClient => fn get_product(id: u32) -> Product as InventoryRequest::GetProduct, Error = InventoryError);
client_method!(InventoryClient => fn record_purchase(id: u32, quantity: u32) -> PurchaseRecord as InventoryRequest::RecordPurchase, Error = InventoryError);
client_method!(InventoryClient => fn ship_product(id: u32, quantity: u32) -> Product as InventoryRequest::ShipProduct, Error = InventoryError);
client_method!(InventoryClient => fn stock_balance() -> Vec<StockBalance> as InventoryRequest::StockBalance, Error = InventoryError);
client_method!(InventoryClient => fn profit_loss() -> ProfitLossReport as InventoryRequest::ProfitLoss, Error = InventoryError);
client_method!(InventoryClient => fn purchase_history() -> Vec<PurchaseRecord> as InventoryRequest::PurchaseHistory, Error = InventoryError);
