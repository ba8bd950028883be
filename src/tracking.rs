use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered when a well-formed response carries no status at all.
pub const NO_STATUS_MESSAGE: &str = "No status found for this ID.";
/// Rendered for any transport, HTTP or parse failure.
pub const FAILURE_MESSAGE: &str = "Unable to fetch details.";
pub const FAILURE_HINT: &str = "Please check the ID or try again later.";

/// Trims the raw input and rejects empty queries. No request may be
/// issued for a `None` result.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Serialize)]
pub struct TrackRequest {
    pub tracking_id: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LatestEvent {
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Wire shape of a tracking response. `status` is optional on purpose:
/// a body without it is a valid "nothing found" result, not a parse error.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TrackingResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub latest_event: Option<LatestEvent>,
}

/// What actually gets rendered for a found shipment. Lines for location
/// and timestamp only appear when the backend sent them non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackingView {
    pub status: String,
    pub activity: String,
    pub location: Option<String>,
    pub timestamp: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl TrackingView {
    /// Returns `None` when the response has no usable status, which the
    /// widget renders as [`NO_STATUS_MESSAGE`]. With no latest event the
    /// activity line falls back to the bare status value.
    pub fn from_result(result: TrackingResult) -> Option<Self> {
        let status = non_empty(result.status)?;
        let event = result.latest_event.unwrap_or_default();
        Some(TrackingView {
            activity: non_empty(event.activity).unwrap_or_else(|| status.clone()),
            location: non_empty(event.location),
            timestamp: non_empty(event.timestamp),
            status,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LookupError {
    Network(String),
    Status(u16),
    Malformed(String),
    TimedOut,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Network(detail) => write!(f, "network error: {}", detail),
            LookupError::Status(code) => write!(f, "unexpected HTTP status {}", code),
            LookupError::Malformed(detail) => write!(f, "malformed response: {}", detail),
            LookupError::TimedOut => write!(f, "request timed out"),
        }
    }
}

/// Lifecycle of one lookup. Starts at `Idle`, moves to `Loading` when a
/// query is accepted and settles in exactly one terminal state.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Succeeded(TrackingResult),
    Failed(LookupError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Terminal state for a settled lookup, or `None` when the outcome
    /// belongs to a superseded submit and must not touch the render
    /// target. For the latest submit this always leaves `Loading`, which
    /// is what re-enables the trigger control.
    pub fn settle(
        latest: u64,
        seq: u64,
        outcome: Result<TrackingResult, LookupError>,
    ) -> Option<RequestState> {
        if seq != latest {
            return None;
        }
        Some(match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(err) => RequestState::Failed(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_queries() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            normalize_query("  DTDC123456  "),
            Some("DTDC123456".to_string())
        );
    }

    #[test]
    fn request_body_uses_snake_case_tracking_id() {
        let body = serde_json::to_value(TrackRequest {
            tracking_id: "DTDC123456".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "tracking_id": "DTDC123456" }));
    }

    #[test]
    fn full_payload_renders_all_lines() {
        let result: TrackingResult = serde_json::from_str(
            r#"{
                "status": "In Transit",
                "latest_event": {
                    "activity": "Out for delivery",
                    "location": "Bengaluru Hub",
                    "timestamp": "2024-05-01T10:00:00Z"
                }
            }"#,
        )
        .unwrap();

        let view = TrackingView::from_result(result).unwrap();
        assert_eq!(view.status, "In Transit");
        assert_eq!(view.activity, "Out for delivery");
        assert_eq!(view.location.as_deref(), Some("Bengaluru Hub"));
        assert_eq!(view.timestamp.as_deref(), Some("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn status_without_event_falls_back_to_bare_status() {
        let result: TrackingResult =
            serde_json::from_str(r#"{ "status": "Delivered" }"#).unwrap();

        let view = TrackingView::from_result(result).unwrap();
        assert_eq!(view.activity, "Delivered");
        assert_eq!(view.location, None);
        assert_eq!(view.timestamp, None);
    }

    #[test]
    fn empty_event_fields_are_omitted() {
        let result: TrackingResult = serde_json::from_str(
            r#"{
                "status": "In Transit",
                "latest_event": { "activity": "", "location": "", "timestamp": "" }
            }"#,
        )
        .unwrap();

        let view = TrackingView::from_result(result).unwrap();
        assert_eq!(view.activity, "In Transit");
        assert_eq!(view.location, None);
        assert_eq!(view.timestamp, None);
    }

    #[test]
    fn missing_status_is_not_found_rather_than_error() {
        let result: TrackingResult = serde_json::from_str(
            r#"{ "latest_event": { "activity": "Picked up" } }"#,
        )
        .unwrap();
        assert_eq!(TrackingView::from_result(result), None);

        let empty: TrackingResult = serde_json::from_str(r#"{ "status": "" }"#).unwrap();
        assert_eq!(TrackingView::from_result(empty), None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // The scraper fallback path returns extra keys next to status.
        let result: TrackingResult = serde_json::from_str(
            r#"{ "status": "Delivered", "details": "layout parsing was limited", "preview": "..." }"#,
        )
        .unwrap();
        assert_eq!(
            TrackingView::from_result(result).unwrap().activity,
            "Delivered"
        );
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        assert!(serde_json::from_str::<TrackingResult>("<html>502</html>").is_err());
    }

    #[test]
    fn not_found_message_is_distinct_from_failure_message() {
        assert_ne!(NO_STATUS_MESSAGE, FAILURE_MESSAGE);
    }

    #[test]
    fn superseded_lookup_never_updates_the_state() {
        let late_response = Ok(TrackingResult {
            status: Some("Delivered".to_string()),
            latest_event: None,
        });
        // Submit #1 settles after submit #2 started; its response is dropped.
        assert_eq!(RequestState::settle(2, 1, late_response), None);
        assert_eq!(RequestState::settle(2, 1, Err(LookupError::TimedOut)), None);
    }

    #[test]
    fn latest_lookup_always_leaves_loading() {
        let succeeded = RequestState::settle(3, 3, Ok(TrackingResult::default())).unwrap();
        assert!(!succeeded.is_loading());

        let failed = RequestState::settle(
            3,
            3,
            Err(LookupError::Network("connection refused".to_string())),
        )
        .unwrap();
        assert!(!failed.is_loading());
        assert_eq!(
            failed,
            RequestState::Failed(LookupError::Network("connection refused".to_string()))
        );
    }

    #[test]
    fn timed_out_lookup_settles_as_failure() {
        let state = RequestState::settle(1, 1, Err(LookupError::TimedOut)).unwrap();
        assert!(matches!(state, RequestState::Failed(LookupError::TimedOut)));
    }
}
