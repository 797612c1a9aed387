//! Core game rules: tuning constants, combat math, and the play session.

pub mod combat_math;
pub mod constants;
pub mod session;

pub use session::*;
