/// Local keyword rules for canned answers
use super::ResponseProvider;
use crate::core::{Action, ConversationContext, Intent, ResolvedResponse};

const GREETING_KEYWORDS: &[&str] = &["hello", "hi"];
const BOOKING_KEYWORDS: &[&str] = &["appointment", "book", "schedule"];
const HANDOFF_KEYWORDS: &[&str] = &["help", "agent", "human"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Maps the latest user text to a canned response. First matching rule wins.
///
/// Matching is plain substring containment on the lowercased text, so
/// "this" greets and "hola" does not. Only the greeting is localized.
pub fn generate_response(text: &str, context: &ConversationContext) -> ResolvedResponse {
    let lower_text = text.to_lowercase();

    // Greetings
    if contains_any(&lower_text, GREETING_KEYWORDS) {
        return ResolvedResponse::new(context.language.greeting(), Intent::Greeting);
    }

    // Booking
    if contains_any(&lower_text, BOOKING_KEYWORDS) {
        if !context.authenticated {
            return ResolvedResponse::new(
                "You'll need to log in to book an appointment. Would you like to sign in now?",
                Intent::AuthRequired,
            )
            .with_suggestions(&["Sign In", "Not now"]);
        }

        return ResolvedResponse::new(
            "I can help you book an appointment. What type of specialist would you like to see?",
            Intent::AppointmentBooking,
        )
        .with_suggestions(&["Primary Care", "Cardiology", "Dermatology", "Orthopedics"]);
    }

    // Human handoff
    if contains_any(&lower_text, HANDOFF_KEYWORDS) {
        return ResolvedResponse::new("Would you like to speak with a human agent?", Intent::Human)
            .with_suggestions(&["Yes, connect me", "No, continue with bot"])
            .with_action(Action::TransferToHuman);
    }

    // Default
    ResolvedResponse::new(
        "I'm not sure I understand. How else can I assist you with your healthcare needs?",
        Intent::Fallback,
    )
    .with_suggestions(&["Book appointment", "Check records", "Speak to a human"])
}

/// Provider backed by [`generate_response`]. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordResponder;

impl ResponseProvider for KeywordResponder {
    fn respond(&self, text: &str, context: &ConversationContext) -> anyhow::Result<ResolvedResponse> {
        log::debug!("📡 Using local keyword rules");
        Ok(generate_response(text, context))
    }
}
