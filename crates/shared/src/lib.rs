//! Wire contract between the route form client and the route-generation service.

pub mod domain;
pub mod error;
pub mod protocol;
