//! The in-memory catalog and purchase history.

use chrono::Local;
use tracing::debug;

use crate::domain::{
    seed_catalog, Product, ProfitLossReport, ProfitStatus, PurchaseRecord, StockBalance,
};
use crate::error::InventoryError;

/// `ctime`-style layout used for purchase timestamps.
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of purchase timestamps.
pub type Clock = Box<dyn Fn() -> String + Send + Sync>;

/// Wall clock in the local time zone.
pub fn system_clock() -> Clock {
    Box::new(|| Local::now().format(TIMESTAMP_FORMAT).to_string())
}

/// Owns the product catalog and purchase history for one session.
///
/// Lookups are linear scans in insertion order. The store does no locking;
/// `InventoryService` gives it a single owner.
pub struct InventoryStore {
    products: Vec<Product>,
    purchases: Vec<PurchaseRecord>,
    clock: Clock,
}

impl InventoryStore {
    pub fn new(products: Vec<Product>, clock: Clock) -> Self {
        Self {
            products,
            purchases: Vec::new(),
            clock,
        }
    }

    /// Store holding the standard five-product catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog(), system_clock())
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn product(&self, id: u32) -> Result<Product, InventoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    fn product_mut(&mut self, id: u32) -> Result<&mut Product, InventoryError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InventoryError::NotFound(id))
    }

    /// Receives `quantity` units into stock and appends a purchase record.
    pub fn record_purchase(&mut self, id: u32, quantity: u32) -> Result<PurchaseRecord, InventoryError> {
        let timestamp = (self.clock)();
        let product = self.product_mut(id)?;
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        let stock = product
            .stock
            .checked_add(quantity)
            .ok_or(InventoryError::InvalidQuantity(quantity))?;
        product.stock = stock;

        let record = PurchaseRecord {
            product_name: product.name.clone(),
            quantity,
            total_cost: f64::from(quantity) * product.cost,
            timestamp,
        };
        debug!(product_id = id, stock, "Stock received");
        self.purchases.push(record.clone());
        Ok(record)
    }

    /// Ships `quantity` units. Either the whole shipment goes out or nothing
    /// changes.
    pub fn ship(&mut self, id: u32, quantity: u32) -> Result<Product, InventoryError> {
        let product = self.product_mut(id)?;
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        if quantity > product.stock {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: product.stock,
            });
        }
        let sold = product
            .sold
            .checked_add(quantity)
            .ok_or(InventoryError::InvalidQuantity(quantity))?;
        product.stock -= quantity;
        product.sold = sold;
        Ok(product.clone())
    }

    pub fn stock_balance(&self) -> Vec<StockBalance> {
        self.products
            .iter()
            .map(|p| StockBalance {
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect()
    }

    pub fn profit_loss(&self) -> ProfitLossReport {
        let (total_profit, total_investment) = self
            .products
            .iter()
            .fold((0.0, 0.0), |(profit, investment), p| {
                (profit + p.profit(), investment + p.investment())
            });
        ProfitLossReport {
            total_investment,
            total_profit,
            status: ProfitStatus::classify(total_profit),
        }
    }

    /// Every purchase in the order it was recorded.
    pub fn purchase_history(&self) -> Vec<PurchaseRecord> {
        self.purchases.clone()
    }
}
