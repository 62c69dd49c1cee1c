use crate::error::FetchError;
use crate::task::Task;

/// Everything the dashboard knows. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashState {
    #[default]
    Empty,
    Loaded(Task),
    Failed(FetchError),
}

impl DashState {
    /// State once the fetch settles. Only the outcome matters: there is a
    /// single fetch and nothing carries over from `Empty`.
    pub fn settled(outcome: Result<Task, FetchError>) -> DashState {
        match outcome {
            Ok(task) => DashState::Loaded(task),
            Err(e) => DashState::Failed(e),
        }
    }

    pub fn task(&self) -> Option<&Task> {
        match self {
            DashState::Loaded(task) => Some(task),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            DashState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
