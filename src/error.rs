use thiserror::Error;

/// Why the task could not be loaded.
///
/// Errors are stringified at the boundary so they can be kept in view state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {code} {text}")]
    Status { code: u16, text: String },
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("response is not a task: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code() {
        let e = FetchError::Status { code: 404, text: "Not Found".into() };
        assert_eq!(e.to_string(), "server returned HTTP 404 Not Found");
    }
}
