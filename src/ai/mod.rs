pub mod local;

pub use local::{generate_response, KeywordResponder};

use crate::core::{ConversationContext, ResolvedResponse};

/// Produces one response per user turn.
///
/// Implementations run off the UI thread, so they must be `Send + Sync`.
pub trait ResponseProvider: Send + Sync {
    fn respond(&self, text: &str, context: &ConversationContext) -> anyhow::Result<ResolvedResponse>;
}
