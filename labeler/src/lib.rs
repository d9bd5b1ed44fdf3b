pub mod report;
pub mod rollout;
#[cfg(test)]
mod table_game;

pub use crate::report::*;
pub use crate::rollout::*;
