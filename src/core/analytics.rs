/// Interaction tracking.
/// The only sink today writes JSON lines to the log; a real analytics service would plug in here.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub user_input: String,
    pub intent: Option<String>,
    pub timestamp: String,
}

impl AnalyticsEvent {
    pub fn new(user_input: impl Into<String>, intent: Option<&str>) -> Self {
        Self {
            user_input: user_input.into(),
            intent: intent.map(str::to_string),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Accepts interaction events.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: AnalyticsEvent);
}

/// Logs every event as JSON under the `analytics` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => log::info!(target: "analytics", "📊 Tracking chatbot interaction: {}", json),
            Err(e) => log::warn!(target: "analytics", "⚠️ Could not serialize event: {}", e),
        }
    }
}

/// Drops everything. Used when tracking is switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalytics;

impl AnalyticsSink for NoopAnalytics {
    fn track(&self, _event: AnalyticsEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_all_fields() {
        let event = AnalyticsEvent::new("hello", Some("greeting"));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["user_input"], "hello");
        assert_eq!(value["intent"], "greeting");
        assert!(value["timestamp"].as_str().is_some());
    }

    #[test]
    fn test_event_without_intent() {
        let event = AnalyticsEvent::new("x", None);
        assert!(event.intent.is_none());
    }
}
