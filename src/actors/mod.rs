//! Actors that own mutable state and serve requests over channels.

mod inventory_service;

pub use inventory_service::*;
