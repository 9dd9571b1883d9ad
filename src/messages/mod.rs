use tokio::sync::oneshot;
use crate::domain::{Product, ProfitLossReport, PurchaseRecord, StockBalance};
use crate::error::InventoryError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the inventory service. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum InventoryRequest {
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    GetProduct {
        id: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    RecordPurchase {
        id: u32,
        quantity: u32,
        respond_to: ServiceResponse<PurchaseRecord, InventoryError>,
    },
    ShipProduct {
        id: u32,
        quantity: u32,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    StockBalance {
        respond_to: ServiceResponse<Vec<StockBalance>, InventoryError>,
    },
    ProfitLoss {
        respond_to: ServiceResponse<ProfitLossReport, InventoryError>,
    },
    PurchaseHistory {
        respond_to: ServiceResponse<Vec<PurchaseRecord>, InventoryError>,
    },
    Shutdown,
}
