pub mod classifier;
pub mod table_classifier;
pub mod training;

pub use crate::classifier::*;
pub use crate::table_classifier::*;
pub use crate::training::*;
