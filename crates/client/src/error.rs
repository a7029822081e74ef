use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of one fetch + decode round.
///
/// Field-level problems never surface here: they are coerced away in the
/// domain crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("no data available for {0}")]
    NotFound(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("request rejected by server: {0}")]
    Rejected(String),
}

/// Which user-facing alert a failure maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// Could not reach the backend.
    Network,
    /// The backend answered with something unusable.
    Server,
}

impl ClientError {
    pub fn alert(&self) -> Alert {
        match self {
            ClientError::Transport(_) | ClientError::NotFound(_) => Alert::Network,
            ClientError::Malformed(_) | ClientError::Rejected(_) => Alert::Server,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_to_alerts() {
        assert_eq!(ClientError::Transport("reset".into()).alert(), Alert::Network);
        assert_eq!(ClientError::NotFound("cash-book".into()).alert(), Alert::Network);
        assert_eq!(ClientError::Malformed("eof".into()).alert(), Alert::Server);
        assert_eq!(ClientError::Rejected("success=false".into()).alert(), Alert::Server);
    }
}
