use crate::kernel::services::ports::ApiError;
use crate::models::TreeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Network or server failure during a load or a mutation.
    #[error("{0}")]
    Fetch(ApiError),
    /// The server answered with something that is not a hierarchy.
    #[error("malformed server response: {0}")]
    Parse(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl NavError {
    /// Validation failures come from UI-state races and are never shown.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, NavError::Validation(_))
    }
}

impl From<ApiError> for NavError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Payload(msg) => NavError::Parse(msg),
            other => NavError::Fetch(other),
        }
    }
}

impl From<TreeError> for NavError {
    fn from(err: TreeError) -> Self {
        let TreeError::Parse(msg) = err;
        NavError::Parse(msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no hierarchy loaded")]
    NotLoaded,
    #[error("node does not exist in the current snapshot")]
    StaleNode,
    #[error("node has no children")]
    Leaf,
    #[error("node is outside the current level")]
    OutsideScope,
    #[error("an error is waiting to be dismissed")]
    Blocked,
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/error.rs"]
mod tests;
