/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Unit acquisition price.
    pub cost: f64,
    /// Unit sale price.
    pub price: f64,
    pub stock: u32,
    pub sold: u32,
}

impl Product {
    /// Creates a product with nothing sold yet.
    pub fn new(id: u32, name: impl Into<String>, cost: f64, price: f64, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cost,
            price,
            stock,
            sold: 0,
        }
    }

    /// Margin earned on everything shipped so far.
    pub fn profit(&self) -> f64 {
        (self.price - self.cost) * f64::from(self.sold)
    }

    /// Acquisition cost of every unit that has passed through the catalog.
    pub fn investment(&self) -> f64 {
        self.cost * (f64::from(self.stock) + f64::from(self.sold))
    }
}

/// The catalog every session starts with.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Laptop", 45000.0, 60000.0, 10),
        Product::new(2, "Monitor", 7000.0, 9500.0, 20),
        Product::new(3, "Keyboard", 600.0, 900.0, 50),
        Product::new(4, "Mouse", 300.0, 550.0, 60),
        Product::new(5, "Printer", 5000.0, 7000.0, 15),
    ]
}
