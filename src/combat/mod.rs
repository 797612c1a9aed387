//! Combat system: monsters, attack resolution, and the battle state machine.

pub mod battle;
pub mod logic;
pub mod types;

pub use battle::*;
pub use logic::*;
pub use types::*;
