#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("Network Error")]
    Connect(#[source] reqwest::Error),
    #[error("http error: {0}")]
    Http(reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid api key header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-2xx status.
    Response,
    /// No response reached us.
    Network,
    /// A response arrived but could not be decoded.
    Codec,
    Config,
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Status { .. } => ApiErrorKind::Response,
            ApiError::Timeout(_) | ApiError::Connect(_) | ApiError::Http(_) => {
                ApiErrorKind::Network
            }
            ApiError::Decode(_) => ApiErrorKind::Codec,
            ApiError::InvalidHeader(_) => ApiErrorKind::Config,
        }
    }

    /// Body of a non-2xx response, when the server sent JSON.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout(value)
        } else if value.is_connect() {
            Self::Connect(value)
        } else {
            Self::Http(value)
        }
    }
}
