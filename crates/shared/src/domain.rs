use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric field the route service may send either as a JSON number or as a string.
///
/// Rendered verbatim, so `180` stays `180` and `"1a"` stays `1a`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(serde_json::Number),
    Text(String),
}

impl LooseNumber {
    /// Mirrors JS falsiness: `0` and `""` count as not provided.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl From<u64> for LooseNumber {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "порядок", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<LooseNumber>,
    #[serde(rename = "название", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "адрес", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        rename = "время_посещения_минут",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visit_minutes: Option<LooseNumber>,
    #[serde(rename = "почему_выбрано", default, skip_serializing_if = "Option::is_none")]
    pub why_chosen: Option<String>,
    #[serde(rename = "что_посмотреть", default, skip_serializing_if = "Option::is_none")]
    pub what_to_see: Option<String>,
}

impl Place {
    pub fn visit_minutes(&self) -> Option<&LooseNumber> {
        self.visit_minutes.as_ref().filter(|m| !m.is_blank())
    }

    pub fn why_chosen(&self) -> Option<&str> {
        non_empty(self.why_chosen.as_deref())
    }

    pub fn what_to_see(&self) -> Option<&str> {
        non_empty(self.what_to_see.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_number_accepts_numbers_and_strings() {
        let n: LooseNumber = serde_json::from_str("90").expect("number");
        let f: LooseNumber = serde_json::from_str("12.5").expect("float");
        let s: LooseNumber = serde_json::from_str("\"около 40\"").expect("text");

        assert_eq!(n.to_string(), "90");
        assert_eq!(f.to_string(), "12.5");
        assert_eq!(s.to_string(), "около 40");
    }

    #[test]
    fn zero_and_empty_are_blank() {
        assert!(LooseNumber::from(0u64).is_blank());
        assert!(LooseNumber::from("").is_blank());
        assert!(!LooseNumber::from(30u64).is_blank());
        assert!(!LooseNumber::from("0").is_blank());
    }

    #[test]
    fn place_with_zero_visit_time_reports_none() {
        let place = Place {
            visit_minutes: Some(LooseNumber::from(0u64)),
            why_chosen: Some(String::new()),
            ..Place::default()
        };
        assert!(place.visit_minutes().is_none());
        assert!(place.why_chosen().is_none());
    }
}
