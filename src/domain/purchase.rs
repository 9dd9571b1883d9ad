/// A stock receipt. Holds its own copy of the product name so later catalog
/// changes never rewrite history.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    pub product_name: String,
    pub quantity: u32,
    pub total_cost: f64,
    pub timestamp: String,
}
