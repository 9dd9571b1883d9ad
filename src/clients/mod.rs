//! Cloneable handles for talking to actors.

#[macro_use]
mod macros;
mod inventory_client;

pub use inventory_client::*;
