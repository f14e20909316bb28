//! Use case layer: application services over the domain.

pub mod analysis;
pub mod game;
