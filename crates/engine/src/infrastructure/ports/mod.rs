//! Ports (trait interfaces) for infrastructure.
//!
//! Use cases depend on these traits, never on concrete adapters, so
//! tests can swap in mocks and the adapters stay replaceable.

mod error;
mod external;
mod repos;

// ============================================================================
// Errors
// ============================================================================

pub use error::{ClassifierError, StoreError};

// ============================================================================
// External services
// ============================================================================

pub use external::ClassifierPort;

#[cfg(test)]
pub use external::MockClassifierPort;

// ============================================================================
// Repositories
// ============================================================================

pub use repos::SessionStore;

#[cfg(test)]
pub use repos::MockSessionStore;
