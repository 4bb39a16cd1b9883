use shared::protocol::RouteRequest;

/// Raw values of the three form controls, before trimming or parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub interests: String,
    pub time: String,
    pub location: String,
}

impl FormInput {
    pub fn new(
        interests: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            interests: interests.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    /// Trims the text fields and parses the time. No range checks; an unparseable
    /// time becomes `NaN` and is forwarded as is.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            interests: self.interests.trim().to_string(),
            time_hours: parse_float_prefix(&self.time),
            location: self.location.trim().to_string(),
        }
    }
}

/// Parses the longest leading decimal literal, after leading whitespace.
/// `"2.5h"` is `2.5`, `"Infinity"` is infinite, anything else is `NaN`.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let magnitude = f64::INFINITY;
        return if s.starts_with('-') { -magnitude } else { magnitude };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
