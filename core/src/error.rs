use thiserror::Error;

/// Main error type for the Raven client
#[derive(Debug, Error)]
pub enum RavenError {
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl RavenError {
    /// HTTP status of a non-200 response, if this error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            RavenError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using RavenError
pub type Result<T> = std::result::Result<T, RavenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_http_failures() {
        let err = RavenError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(RavenError::Network("refused".into()).status(), None);
        assert_eq!(RavenError::NotImplemented("upload_links").status(), None);
    }

    #[test]
    fn messages() {
        let err = RavenError::Status {
            status: 401,
            body: "bad key".into(),
        };
        assert_eq!(err.to_string(), "API returned status 401: bad key");
        assert_eq!(
            RavenError::NotImplemented("upload_links").to_string(),
            "upload_links is not implemented"
        );
    }
}
