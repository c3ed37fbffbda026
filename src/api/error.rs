use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a request to the backend produced nothing usable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn parse(what: &'static str, source: serde_json::Error) -> Self {
        FetchError::Parse { what, source }
    }
}
