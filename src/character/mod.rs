//! Character model, progression, and persistence.

pub mod codec;
pub mod entity;
pub mod progression;
pub mod save;
pub mod types;

pub use entity::*;
pub use save::*;
pub use types::*;
