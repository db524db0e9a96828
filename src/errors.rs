use crate::data::LoadError;
use astra::Response;
// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query strings) or the dataset layer.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DataLoad(LoadError),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DataLoad(_) => 502,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataLoad(err) => write!(f, "Error loading data: {err}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::DataLoad(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        ServerError::DataLoad(err)
    }
}
