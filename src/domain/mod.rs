pub mod product;
pub mod purchase;
pub mod report;

pub use product::*;
pub use purchase::*;
pub use report::*;
