use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::InventoryClient;
use crate::domain::{Product, ProfitLossReport, PurchaseRecord, StockBalance};
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};
use crate::store::InventoryStore;

/// Actor that owns the [`InventoryStore`].
///
/// Every request is handled to completion before the next one is received,
/// so each lookup-then-mutate sequence in the store runs without
/// interleaving, however many clients are connected.
pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    store: InventoryStore,
}

impl InventoryService {
    pub fn new(buffer_size: usize, store: InventoryStore) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, store };
        let client = InventoryClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Exits on `Shutdown` or once every client is dropped.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                InventoryRequest::GetProduct { id, respond_to } => {
                    self.handle_get_product(id, respond_to);
                }
                InventoryRequest::RecordPurchase {
                    id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_record_purchase(id, quantity, respond_to);
                }
                InventoryRequest::ShipProduct {
                    id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_ship_product(id, quantity, respond_to);
                }
                InventoryRequest::StockBalance { respond_to } => {
                    self.handle_stock_balance(respond_to);
                }
                InventoryRequest::ProfitLoss { respond_to } => {
                    self.handle_profit_loss(respond_to);
                }
                InventoryRequest::PurchaseHistory { respond_to } => {
                    self.handle_purchase_history(respond_to);
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!("InventoryService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Vec<Product>, InventoryError>) {
        debug!("Processing list_products request");
        let _ = respond_to.send(Ok(self.store.list_products()));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: u32, respond_to: ServiceResponse<Product, InventoryError>) {
        debug!("Processing get_product request");

        let result = self.store.product(id);
        match &result {
            Ok(product) => info!(product_name = %product.name, stock = product.stock, "Product found"),
            Err(_) => debug!("Product not found"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_record_purchase(
        &mut self,
        id: u32,
        quantity: u32,
        respond_to: ServiceResponse<PurchaseRecord, InventoryError>,
    ) {
        debug!("Processing record_purchase request");

        let result = self.store.record_purchase(id, quantity);
        match &result {
            Ok(record) => info!(
                product_name = %record.product_name,
                total_cost = record.total_cost,
                "Purchase recorded"
            ),
            Err(e) => warn!(error = %e, "Purchase rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id, quantity = %quantity), skip(self, respond_to))]
    fn handle_ship_product(
        &mut self,
        id: u32,
        quantity: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    ) {
        debug!("Processing ship_product request");

        let result = self.store.ship(id, quantity);
        match &result {
            Ok(product) => info!(
                remaining_stock = product.stock,
                sold = product.sold,
                "Shipment dispatched"
            ),
            Err(InventoryError::InsufficientStock {
                requested,
                available,
            }) => error!(requested, available, "Insufficient stock"),
            Err(e) => warn!(error = %e, "Shipment rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_stock_balance(&self, respond_to: ServiceResponse<Vec<StockBalance>, InventoryError>) {
        debug!("Processing stock_balance request");
        let _ = respond_to.send(Ok(self.store.stock_balance()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_profit_loss(&self, respond_to: ServiceResponse<ProfitLossReport, InventoryError>) {
        debug!("Processing profit_loss request");

        let report = self.store.profit_loss();
        info!(
            total_profit = report.total_profit,
            total_investment = report.total_investment,
            status = %report.status,
            "Profit/loss computed"
        );

        let _ = respond_to.send(Ok(report));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_purchase_history(
        &self,
        respond_to: ServiceResponse<Vec<PurchaseRecord>, InventoryError>,
    ) {
        debug!("Processing purchase_history request");
        let _ = respond_to.send(Ok(self.store.purchase_history()));
    }
}
