pub mod alpha_beta;
pub mod cache;
#[cfg(test)]
mod counting_game;
pub mod entry;
pub mod error;
pub mod minmax;
pub mod options;
pub mod registry;
pub mod reporter;
pub mod strategy;

pub use alpha_beta::*;
pub use cache::*;
pub use entry::*;
pub use error::*;
pub use minmax::*;
pub use options::*;
pub use registry::*;
pub use reporter::*;
pub use strategy::*;
