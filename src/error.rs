use thiserror::Error;


#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid controller host {host:?}: {source}")]
    InvalidHost {
        host: String,
        source: url::ParseError
    },

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("controller replied with status {status}: {message}")]
    Status {
        status: u16,
        message: String
    },

    #[error("no host provided in config entry {0}")]
    MissingHost(String),
}

pub type Result<T> = std::result::Result<T, Error>;
