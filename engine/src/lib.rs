pub mod game_model;
pub mod position;
pub mod state_node;
pub mod value;

pub use crate::game_model::*;
pub use crate::position::*;
pub use crate::state_node::*;
pub use crate::value::*;
