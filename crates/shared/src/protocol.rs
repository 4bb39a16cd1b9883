use serde::{Deserialize, Serialize};

use crate::domain::{non_empty, LooseNumber, Place};

/// Payload posted to `/api/generate_route`.
///
/// `time_hours` is forwarded unvalidated; a non-finite value serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub interests: String,
    pub time_hours: f64,
    pub location: String,
}

/// Echo of the request as the route service understood it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestEcho {
    #[serde(rename = "интересы", default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(rename = "время_часов", default, skip_serializing_if = "Option::is_none")]
    pub time_hours: Option<f64>,
    #[serde(rename = "местоположение", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Itinerary returned by the route service. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(rename = "общее_описание", default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(
        rename = "общее_время_минут",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_minutes: Option<LooseNumber>,
    #[serde(
        rename = "категории_интересов",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub interest_categories: Option<Vec<String>>,
    #[serde(rename = "маршрут", default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<Place>>,
    #[serde(rename = "советы", default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(rename = "успешно", default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(rename = "ошибка", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "запрос", default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestEcho>,
    #[serde(rename = "сырой_ответ", default, skip_serializing_if = "Option::is_none")]
    pub raw_answer: Option<String>,
}

impl RouteResponse {
    /// Only an explicit `false` marks a failure; a missing flag does not.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }

    pub fn overview(&self) -> Option<&str> {
        non_empty(self.overview.as_deref())
    }

    pub fn total_minutes(&self) -> Option<&LooseNumber> {
        self.total_minutes.as_ref().filter(|m| !m.is_blank())
    }

    pub fn interest_categories(&self) -> &[String] {
        self.interest_categories.as_deref().unwrap_or_default()
    }

    pub fn places(&self) -> &[Place] {
        self.places.as_deref().unwrap_or_default()
    }

    pub fn tips(&self) -> &[String] {
        self.tips.as_deref().unwrap_or_default()
    }
}

/// Reply of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub locations_count: u64,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
