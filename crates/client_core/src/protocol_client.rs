//! Request/response exchange with the route-generation service.

use shared::{
    error::{message_or, ErrorBody, ROUTE_NOT_GENERATED},
    protocol::{HealthResponse, RouteRequest, RouteResponse},
};
use tracing::{debug, warn};

use crate::{
    error::RouteError,
    transport::{HttpReply, HttpTransport, RouteTransport, TransportError},
};

pub const GENERATE_ROUTE_PATH: &str = "/api/generate_route";
pub const HEALTH_PATH: &str = "/api/health";

pub struct RouteClient<T: RouteTransport> {
    transport: T,
}

impl RouteClient<HttpTransport> {
    pub fn connect(server_url: &str) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(server_url)?))
    }
}

impl<T: RouteTransport> RouteClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn generate_route(&self, request: &RouteRequest) -> Result<RouteResponse, RouteError> {
        let body = serde_json::to_vec(request)?;
        debug!(
            interests = %request.interests,
            time_hours = request.time_hours,
            location = %request.location,
            "posting route request"
        );
        let reply = self.transport.post_json(GENERATE_ROUTE_PATH, body).await?;
        debug!(status = reply.status, bytes = reply.body.len(), "route reply received");
        interpret_route_reply(&reply)
    }

    pub async fn health(&self) -> Result<HealthResponse, RouteError> {
        let reply = self.transport.get(HEALTH_PATH).await?;
        if !reply.is_success() {
            return Err(http_failure(&reply));
        }
        Ok(serde_json::from_slice(&reply.body)?)
    }
}

/// Classifies a reply: HTTP status first, then the in-body success flag.
pub fn interpret_route_reply(reply: &HttpReply) -> Result<RouteResponse, RouteError> {
    if !reply.is_success() {
        return Err(http_failure(reply));
    }

    let route: RouteResponse = serde_json::from_slice(&reply.body)?;
    if route.is_rejected() {
        return Err(RouteError::Rejected {
            message: message_or(route.error.as_deref(), ROUTE_NOT_GENERATED),
        });
    }
    Ok(route)
}

fn http_failure(reply: &HttpReply) -> RouteError {
    let body = serde_json::from_slice::<ErrorBody>(&reply.body).unwrap_or_else(|error| {
        warn!(status = reply.status, %error, "error reply body is not JSON");
        ErrorBody::default()
    });
    RouteError::Http {
        status: reply.status,
        message: body.message_or_fallback(),
    }
}

#[cfg(test)]
#[path = "tests/protocol_client_tests.rs"]
mod tests;
