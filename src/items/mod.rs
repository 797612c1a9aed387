//! Item system: item kinds and the inventory that holds them.

pub mod inventory;
pub mod types;

pub use inventory::*;
pub use types::*;
