use thiserror::Error;

pub type Result<T> = std::result::Result<T, BptfError>;

#[derive(Debug, Error)]
pub enum BptfError {
    #[error("Cannot deserialize response from {0}")]
    CannotDeserializeResponse(String),

    #[error("No Api key set")]
    NoApiKeySet,

    #[error("{0}")]
    Api(String),

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    UrlEncoding(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    HttpRequest(#[from] reqwest::Error),
}
