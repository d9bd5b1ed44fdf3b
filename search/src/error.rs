use classifier::ClassificationError;
use engine::{ModelError, Role};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no legal move produced a conclusion at the search root")]
    Inconclusive,

    #[error("controlling role {0:?} matches neither the maximizing nor the minimizing role")]
    RoleMismatch(Role),

    #[error("unknown search strategy {0:?}")]
    UnknownStrategy(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

/// Separates the defined "ran out of time" outcome from real failures while
/// the recursion unwinds. A cancelled call surfaces as `Ok(None)` from
/// `best_move`, never as an error.
#[derive(Debug)]
pub(crate) enum Unwind {
    Cancelled,
    Failed(SearchError),
}

impl From<SearchError> for Unwind {
    fn from(err: SearchError) -> Self {
        Unwind::Failed(err)
    }
}

impl From<ModelError> for Unwind {
    fn from(err: ModelError) -> Self {
        Unwind::Failed(SearchError::Model(err))
    }
}

impl From<ClassificationError> for Unwind {
    fn from(err: ClassificationError) -> Self {
        Unwind::Failed(SearchError::Classification(err))
    }
}
