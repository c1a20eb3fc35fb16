// src/infra/errors.rs — Error types for Haqooq

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HaqooqError {
    // Answer service errors (all collapse to the apology turn in a session)
    #[error("Answer service unreachable at {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Answer service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed answer service response: {0}")]
    Decode(String),

    // Local state
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preferences error: {0}")]
    Prefs(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HaqooqError {
    pub fn transport(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        HaqooqError::Transport {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let e = HaqooqError::transport("http://x/chat", "connection refused");
        assert_eq!(
            e.to_string(),
            "Answer service unreachable at http://x/chat: connection refused"
        );
    }

    #[test]
    fn test_status_display() {
        let e = HaqooqError::Status {
            status: 503,
            body: "busy".into(),
        };
        assert_eq!(e.to_string(), "Answer service returned HTTP 503: busy");
    }
}
