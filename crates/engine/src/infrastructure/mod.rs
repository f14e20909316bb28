//! Infrastructure layer: ports and their concrete adapters.

pub mod classifier;
pub mod ports;
pub mod session_store;
