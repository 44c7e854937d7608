use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, or mid-body error).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The provider rejected our credentials. Never retried.
    #[error("authentication rejected ({status}) by {url}")]
    Auth { status: u16, url: String },
    /// The provider asked us to back off (HTTP 429).
    #[error("rate limited by {url}")]
    RateLimited { url: String },
    /// Any other non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The envelope decoded but did not contain the expected result set.
    #[error("result set {name:?} missing from response of {url}")]
    MissingResultSet { name: &'static str, url: String },
    #[error("invalid client configuration: {0}")]
    Builder(String),
}

impl Error {
    /// Whether a retry has any chance of succeeding.
    ///
    /// Network failures, 5xx responses, and rate limiting are transient;
    /// authentication rejections and malformed responses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Request { source, .. } => {
                source.is_timeout()
                    || source.is_connect()
                    || source.status().is_none_or(|s| s.is_server_error())
            }
            Error::RateLimited { .. } => true,
            Error::Status { status, .. } => *status >= 500,
            Error::Auth { .. }
            | Error::Decode { .. }
            | Error::MissingResultSet { .. }
            | Error::Builder(_) => false,
        }
    }
}
