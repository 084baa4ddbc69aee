pub mod analytics;
pub mod conversation;
pub mod language;
pub mod message;

pub use analytics::{AnalyticsSink, LogAnalytics, NoopAnalytics};
pub use conversation::{Conversation, ConversationContext};
pub use language::Language;
pub use message::{Action, Intent, Message, ResolvedResponse};
