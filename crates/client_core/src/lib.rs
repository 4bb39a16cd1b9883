//! Client side of the route form: builds the request, talks to the route
//! service, and renders the itinerary through UI ports.

pub mod controller;
pub mod error;
pub mod protocol_client;
pub mod render;
pub mod transport;
pub mod types;

pub use controller::{
    Region, ScrollBlock, SubmissionController, SubmitEvent, SubmitOutcome, UiPorts,
};
pub use error::RouteError;
pub use protocol_client::RouteClient;
pub use transport::{HttpReply, HttpTransport, RouteTransport, TransportError};
pub use types::FormInput;
