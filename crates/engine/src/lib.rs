//! ScamGuard Engine library.
//!
//! Server-side code for the ScamGuard scoring API and training game.
//!
//! ## Structure
//!
//! - `use_cases/` - Orchestration of domain operations over the ports
//! - `infrastructure/` - Port traits and their production adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
