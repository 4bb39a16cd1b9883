use serde::{Deserialize, Serialize};

use crate::domain::non_empty;

/// Shown when the service reports an HTTP failure without a usable message,
/// or when no decodable reply arrived at all.
pub const GENERIC_ROUTE_ERROR: &str = "Ошибка при генерации маршрута";

/// Shown when a 2xx reply carries `"успешно": false` without an `"ошибка"` text.
pub const ROUTE_NOT_GENERATED: &str = "Не удалось сгенерировать маршрут";

/// Prefix prepended to every message placed in the error region.
pub const ERROR_MARKER: &str = "❌ ";

/// Body of a non-2xx reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn message_or_fallback(&self) -> String {
        message_or(self.error.as_deref(), GENERIC_ROUTE_ERROR)
    }
}

pub fn message_or(message: Option<&str>, fallback: &str) -> String {
    non_empty(message).unwrap_or(fallback).to_string()
}

pub fn display_error(message: &str) -> String {
    format!("{ERROR_MARKER}{message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_messages_fall_back() {
        assert_eq!(ErrorBody::default().message_or_fallback(), GENERIC_ROUTE_ERROR);
        assert_eq!(ErrorBody::new("").message_or_fallback(), GENERIC_ROUTE_ERROR);
        assert_eq!(ErrorBody::new("boom").message_or_fallback(), "boom");
        assert_eq!(message_or(None, ROUTE_NOT_GENERATED), ROUTE_NOT_GENERATED);
    }

    #[test]
    fn display_prefixes_marker() {
        assert_eq!(display_error("boom"), "❌ boom");
    }
}
