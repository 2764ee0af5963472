// Game module - session state and the per-tick rules
//
// This module contains:
// - session.rs: Session struct, mode state machine and tick update
// - types.rs: Shared enums (modes, commands, tick reports)

pub mod session;
pub mod types;

pub use session::Session;
pub use types::*;
