//! Text layout for menus and reports.

use std::fmt::{self, Write};

use crate::domain::{Product, ProfitLossReport, PurchaseRecord, StockBalance};
use crate::error::{ConsoleError, InventoryError};

const WIDTH: usize = 60;

pub struct Renderer {
    currency: String,
}

impl Renderer {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    fn money(&self, amount: f64) -> String {
        format!("{}{}", self.currency, amount)
    }

    pub fn menu(&self, out: &mut impl Write) -> fmt::Result {
        title(out, "INVENTORY MANAGEMENT SYSTEM")?;
        writeln!(out, "1. List All Products")?;
        writeln!(out, "2. Display Product Info")?;
        writeln!(out, "3. Purchase Product")?;
        writeln!(out, "4. Ship Product")?;
        writeln!(out, "5. Balance Stock")?;
        writeln!(out, "6. Profit/Loss Report")?;
        writeln!(out, "7. Purchase Report")?;
        writeln!(out, "0. Exit")?;
        rule(out, '-')?;
        write!(out, "Enter your choice: ")
    }

    pub fn product_table(&self, out: &mut impl Write, products: &[Product]) -> fmt::Result {
        title(out, "PRODUCT LIST")?;
        writeln!(out, "{:<5}{:<20}{:<10}{:<10}{:<10}", "ID", "Name", "Cost", "Price", "Stock")?;
        rule(out, '-')?;
        for p in products {
            writeln!(out, "{:<5}{:<20}{:<10}{:<10}{:<10}", p.id, p.name, p.cost, p.price, p.stock)?;
        }
        rule(out, '=')
    }

    pub fn product_detail(&self, out: &mut impl Write, p: &Product) -> fmt::Result {
        title(out, "PRODUCT DETAILS")?;
        writeln!(out, "Product ID   : {}", p.id)?;
        writeln!(out, "Name         : {}", p.name)?;
        writeln!(out, "Cost Price   : {}", p.cost)?;
        writeln!(out, "Sell Price   : {}", p.price)?;
        writeln!(out, "Stock Left   : {}", p.stock)?;
        writeln!(out, "Units Sold   : {}", p.sold)?;
        rule(out, '=')
    }

    pub fn purchase_receipt(&self, out: &mut impl Write, record: &PurchaseRecord) -> fmt::Result {
        writeln!(
            out,
            "Purchased {} units of {} successfully!",
            record.quantity, record.product_name
        )?;
        writeln!(out, "Total Cost: {}", self.money(record.total_cost))
    }

    pub fn shipment(&self, out: &mut impl Write, product: &Product, quantity: u32) -> fmt::Result {
        writeln!(out, "Shipped {} units of {}", quantity, product.name)
    }

    pub fn stock_balance(&self, out: &mut impl Write, lines: &[StockBalance]) -> fmt::Result {
        title(out, "BALANCE STOCK")?;
        for line in lines {
            writeln!(out, "{:>20} : {} units left", line.name, line.stock)?;
        }
        rule(out, '=')
    }

    pub fn profit_loss(&self, out: &mut impl Write, report: &ProfitLossReport) -> fmt::Result {
        title(out, "PROFIT / LOSS REPORT")?;
        writeln!(out, "Total Investment: {}", self.money(report.total_investment))?;
        writeln!(out, "Total Profit    : {}", self.money(report.total_profit))?;
        writeln!(out, "Status: {}", report.status)?;
        rule(out, '=')
    }

    pub fn purchase_history(&self, out: &mut impl Write, records: &[PurchaseRecord]) -> fmt::Result {
        title(out, "PURCHASE REPORT")?;
        writeln!(out, "{:<20}{:<10}{:<15}{:<25}", "Product", "Qty", "Total Cost", "Date")?;
        rule(out, '-')?;
        for r in records {
            writeln!(
                out,
                "{:<20}{:<10}{:<15}{:<25}",
                r.product_name, r.quantity, r.total_cost, r.timestamp
            )?;
        }
        rule(out, '=')
    }

    pub fn goodbye(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "Exiting... Thank you!")
    }

    /// One-line message for an error the menu loop recovers from.
    pub fn error(&self, out: &mut impl Write, err: &ConsoleError) -> fmt::Result {
        match err {
            ConsoleError::Inventory(InventoryError::NotFound(_)) => writeln!(out, "Product not found!"),
            ConsoleError::Inventory(InventoryError::InsufficientStock { available, .. }) => {
                writeln!(out, "Not enough stock! Only {} units available.", available)
            }
            ConsoleError::Inventory(InventoryError::InvalidQuantity(_)) => {
                writeln!(out, "Quantity must be greater than zero!")
            }
            ConsoleError::InvalidSelection(_) => writeln!(out, "Invalid Choice!"),
            other => writeln!(out, "{}", other),
        }
    }
}

fn rule(out: &mut impl Write, ch: char) -> fmt::Result {
    let line: String = std::iter::repeat(ch).take(WIDTH).collect();
    writeln!(out, "{}", line)
}

fn title(out: &mut impl Write, text: &str) -> fmt::Result {
    rule(out, '=')?;
    writeln!(out, "{:^width$}", text, width = WIDTH)?;
    rule(out, '=')
}
