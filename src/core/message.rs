use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the chat transcript. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
    /// Quick replies shown under the bubble
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub is_error: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            timestamp: now_iso(),
            options: Vec::new(),
            is_error: false,
        }
    }

    pub fn bot(text: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            timestamp: now_iso(),
            options,
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::bot(text, Vec::new())
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Coarse label for what a response is about.
///
/// Travels as a plain string tag; tags this crate doesn't know land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intent {
    Greeting,
    AuthRequired,
    AppointmentBooking,
    Human,
    Fallback,
    Other(String),
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Greeting => "greeting",
            Intent::AuthRequired => "auth_required",
            Intent::AppointmentBooking => "appointment_booking",
            Intent::Human => "human",
            Intent::Fallback => "fallback",
            Intent::Other(tag) => tag,
        }
    }
}

impl From<String> for Intent {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "greeting" => Intent::Greeting,
            "auth_required" => Intent::AuthRequired,
            "appointment_booking" => Intent::AppointmentBooking,
            "human" => Intent::Human,
            "fallback" => Intent::Fallback,
            _ => Intent::Other(tag),
        }
    }
}

impl From<Intent> for String {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    TransferToHuman,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::TransferToHuman => "transfer_to_human",
        }
    }
}

/// Output of a single resolution. Lives for one turn only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedResponse {
    pub response_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl ResolvedResponse {
    pub fn new(response_text: impl Into<String>, intent: Intent) -> Self {
        Self {
            response_text: response_text.into(),
            suggestions: None,
            intent: Some(intent),
            action: None,
        }
    }

    pub fn with_suggestions(mut self, suggestions: &[&str]) -> Self {
        self.suggestions = Some(suggestions.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn is_handoff(&self) -> bool {
        self.intent == Some(Intent::Human) && self.action == Some(Action::TransferToHuman)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_is_flagged_bot_entry() {
        let msg = Message::error("boom");
        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.is_error);
        assert!(msg.options.is_empty());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let msg = Message::user("hi");
        assert!(chrono::DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
    }

    #[test]
    fn test_message_json_shape() {
        let msg = Message::bot("hello", vec!["A".to_string()]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["sender"], "bot");
        assert_eq!(value["isError"], false);
        assert_eq!(value["options"][0], "A");
    }

    #[test]
    fn test_handoff_needs_intent_and_action() {
        let plain = ResolvedResponse::new("x", Intent::Human);
        assert!(!plain.is_handoff());
        assert!(plain.with_action(Action::TransferToHuman).is_handoff());
    }

    #[test]
    fn test_unknown_intent_from_provider_reply() {
        let json = r#"{"response_text":"Let me check","intent":"triage"}"#;
        let response: ResolvedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.intent, Some(Intent::Other("triage".to_string())));
        assert_eq!(response.intent.as_ref().map(Intent::as_str), Some("triage"));

        let known: ResolvedResponse =
            serde_json::from_str(r#"{"response_text":"x","intent":"human"}"#).unwrap();
        assert_eq!(known.intent, Some(Intent::Human));
    }

    #[test]
    fn test_intent_tags() {
        assert_eq!(Intent::AuthRequired.as_str(), "auth_required");
        assert_eq!(
            serde_json::to_string(&Intent::AppointmentBooking).unwrap(),
            "\"appointment_booking\""
        );
    }
}
