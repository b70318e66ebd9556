use thiserror::Error;

/// Crate-wide error type.
///
/// Startup fails loudly on configuration errors. Delivery failures only reach
/// the caller when the channel's delivery error policy says so; a channel
/// running with the `log` policy swallows them after logging.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("configuration file error at '{path}': {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration parse error in '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("webhook delivery error: {0}")]
    Delivery(#[from] reqwest::Error),

    #[error("http client initialization failed: {0}")]
    ClientInit(String),

    #[error("error posting webhook to {url}: got status {status}")]
    DeliveryStatus { status: u16, url: String },

    #[error("event file error at '{path}': {reason}")]
    EventFile { path: String, reason: String },
}

/// Result type alias for kubenotify operations.
pub type NotifyResult<T> = Result<T, NotifyError>;
