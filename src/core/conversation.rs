use super::analytics::{AnalyticsEvent, AnalyticsSink};
use super::language::Language;
use super::message::{Message, ResolvedResponse};
use crate::ai::ResponseProvider;
use serde::{Deserialize, Serialize};

/// How many trailing messages are handed to the provider.
pub const HISTORY_WINDOW: usize = 5;

pub const WELCOME_TEXT: &str = "Hello! I'm your healthcare assistant. How can I help you today?";
pub const WELCOME_OPTIONS: [&str; 3] = ["Book appointment", "Check my records", "Medication reminders"];

pub const LOGIN_CONFIRMATION: &str = "You've been successfully logged in. How can I assist you now?";
pub const LOGIN_OPTIONS: [&str; 3] = ["Book appointment", "Check my records", "Speak to a doctor"];

pub const ERROR_TEXT: &str =
    "I'm having trouble processing your request right now. Please try again later.";

/// Phrases meaning "log in" in the languages users tend to type.
pub const LOGIN_TERMS: [&str; 11] = [
    "login",
    "sign in",
    "log in",
    "signin",
    "iniciar sesión",
    "connexion",
    "登录",
    "entrar",
    "anmelden",
    "登入",
    "로그인",
];

/// Mock patient record filled in by the login shortcut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub patient_id: String,
    pub last_visit: String,
}

impl UserProfile {
    pub fn demo() -> Self {
        Self {
            name: "John Doe".to_string(),
            patient_id: "P123456".to_string(),
            last_visit: "2025-03-15".to_string(),
        }
    }
}

/// Snapshot handed to a [`ResponseProvider`]. Rebuilt for every turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub authenticated: bool,
    pub user_profile: Option<UserProfile>,
    pub language: Language,
    pub recent_history: Vec<Message>,
    pub timestamp: String,
}

/// Owns the chat transcript and every flag the widget renders from.
///
/// Messages are append-only: callers get a shared slice and nothing
/// here ever edits or removes an entry.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    input: String,
    loading: bool,
    transferring_to_human: bool,
    authenticated: bool,
    user_profile: Option<UserProfile>,
    language: Language,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Conversation {
    pub fn new(language: Language) -> Self {
        let welcome = Message::bot(
            WELCOME_TEXT,
            WELCOME_OPTIONS.iter().map(|s| s.to_string()).collect(),
        );

        Self {
            messages: vec![welcome],
            input: String::new(),
            loading: false,
            transferring_to_human: false,
            authenticated: false,
            user_profile: None,
            language,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text field binding for the composer.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_transferring_to_human(&self) -> bool {
        self.transferring_to_human
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.user_profile.as_ref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    pub fn append_user_message(&mut self, text: impl Into<String>) {
        self.messages.push(Message::user(text));
    }

    pub fn append_bot_message(&mut self, response: &ResolvedResponse) {
        let options = response.suggestions.clone().unwrap_or_default();
        self.messages.push(Message::bot(response.response_text.clone(), options));
    }

    pub fn set_authenticated(&mut self, profile: UserProfile) {
        log::info!("🔐 Signed in as {} ({})", profile.name, profile.patient_id);
        self.authenticated = true;
        self.user_profile = Some(profile);
    }

    /// Switches language and posts a confirmation in the new language.
    pub fn set_language(&mut self, language: Language) {
        log::info!("🌐 Language set to {}", language);
        self.language = language;
        self.messages.push(Message::bot(language.change_confirmation(), Vec::new()));
    }

    pub fn context(&self) -> ConversationContext {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        ConversationContext {
            authenticated: self.authenticated,
            user_profile: self.user_profile.clone(),
            language: self.language,
            recent_history: self.messages[start..].to_vec(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Takes the composer text if it is worth sending, leaving the field empty.
    pub fn take_input(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.input))
    }

    /// Starts a turn: records the user message and raises the loading flag.
    ///
    /// The returned context is taken before the message is appended, so its
    /// history ends with the previous entry. Returns `None` for blank text or
    /// while another turn is in flight.
    pub fn begin_turn(&mut self, text: &str) -> Option<ConversationContext> {
        if text.trim().is_empty() {
            return None;
        }
        if self.loading {
            log::debug!("Turn already in flight, ignoring input");
            return None;
        }

        let context = self.context();
        self.append_user_message(text);
        self.loading = true;
        Some(context)
    }

    /// Completes the turn started by [`Conversation::begin_turn`].
    pub fn finish_turn(
        &mut self,
        text: &str,
        outcome: anyhow::Result<ResolvedResponse>,
        analytics: &dyn AnalyticsSink,
    ) {
        self.loading = false;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error processing message: {:#}", e);
                self.messages.push(Message::error(ERROR_TEXT));
                return;
            }
        };

        self.append_bot_message(&response);

        if response.is_handoff() {
            // No queue behind this yet, only the status line
            log::info!(
                "🙋 Handoff requested ({})",
                response.action.map(|a| a.as_str()).unwrap_or_default()
            );
            self.transferring_to_human = true;
        }

        if mentions_login(text) {
            self.handle_login();
        }

        analytics.track(AnalyticsEvent::new(
            text,
            response.intent.as_ref().map(|i| i.as_str()),
        ));
    }

    /// Runs a whole turn on the calling thread. Returns false if the input was ignored.
    pub fn submit(
        &mut self,
        text: &str,
        provider: &dyn ResponseProvider,
        analytics: &dyn AnalyticsSink,
    ) -> bool {
        let Some(context) = self.begin_turn(text) else {
            return false;
        };
        let outcome = provider.respond(text, &context);
        self.finish_turn(text, outcome, analytics);
        true
    }

    fn handle_login(&mut self) {
        self.set_authenticated(UserProfile::demo());
        self.messages.push(Message::bot(
            LOGIN_CONFIRMATION,
            LOGIN_OPTIONS.iter().map(|s| s.to_string()).collect(),
        ));
    }
}

fn mentions_login(text: &str) -> bool {
    let lower = text.to_lowercase();
    LOGIN_TERMS.iter().any(|term| lower.contains(term))
}
