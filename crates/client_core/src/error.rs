use shared::error::GENERIC_ROUTE_ERROR;
use thiserror::Error;

use crate::transport::TransportError;

/// Every way a route submission can fail. All variants end in the same error region.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("route service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("route service could not build a route: {message}")]
    Rejected { message: String },
    #[error("malformed route service reply: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RouteError {
    /// Text shown to the user, without the error marker.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Http { message, .. } | Self::Rejected { message } => message.as_str(),
            Self::Transport(_) | Self::Decode(_) => GENERIC_ROUTE_ERROR,
        }
    }
}
