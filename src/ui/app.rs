/// Main application structure and lifecycle management
use crate::ai::ResponseProvider;
use crate::config::Config;
use crate::core::{AnalyticsSink, Conversation, ResolvedResponse};
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use super::{avatar, chat, header};

/// Result of a turn, sent back from the background task
pub struct TurnOutcome {
    pub text: String,
    pub result: anyhow::Result<ResolvedResponse>,
}

pub struct HealthConnectApp {
    pub config: Config,
    pub conversation: Conversation,
    provider: Arc<dyn ResponseProvider>,
    analytics: Box<dyn AnalyticsSink>,
    runtime: tokio::runtime::Handle,
    outcome_receiver: std_mpsc::Receiver<TurnOutcome>,
    outcome_sender: std_mpsc::Sender<TurnOutcome>,
    avatar_texture: Option<egui::TextureHandle>,
    avatar_attempted: bool,
    style_initialized: bool,
}

impl HealthConnectApp {
    pub fn new(
        config: Config,
        provider: Arc<dyn ResponseProvider>,
        analytics: Box<dyn AnalyticsSink>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let conversation = Conversation::new(config.default_language);
        let (sender, receiver) = std_mpsc::channel();

        Self {
            config,
            conversation,
            provider,
            analytics,
            runtime,
            outcome_receiver: receiver,
            outcome_sender: sender,
            avatar_texture: None,
            avatar_attempted: false,
            style_initialized: false,
        }
    }

    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }
        ctx.set_visuals(egui::Visuals::light());
        self.style_initialized = true;
    }

    /// Tries the avatar once; initials are drawn if it fails.
    fn load_avatar(&mut self, ctx: &egui::Context) {
        if self.avatar_attempted {
            return;
        }
        self.avatar_attempted = true;

        match avatar::load_avatar(ctx, &self.config.avatar_path) {
            Ok(texture) => {
                log::info!("🖼️ Avatar loaded from {}", self.config.avatar_path.display());
                self.avatar_texture = Some(texture);
            }
            Err(e) => log::debug!("No avatar, using initials: {:#}", e),
        }
    }

    /// Starts a turn and resolves it on the tokio runtime
    pub fn send_message(&mut self, ctx: &egui::Context, text: String) {
        let Some(context) = self.conversation.begin_turn(&text) else {
            return;
        };

        let provider = Arc::clone(&self.provider);
        let sender = self.outcome_sender.clone();
        let ctx_clone = ctx.clone();

        self.runtime.spawn(async move {
            let prompt = text.clone();
            // Provider panics surface as JoinError; an outcome is always sent
            let result = match tokio::task::spawn_blocking(move || provider.respond(&prompt, &context)).await {
                Ok(result) => result,
                Err(e) => Err(anyhow::anyhow!("Response provider failed: {}", e)),
            };

            if let Err(e) = sender.send(TurnOutcome { text, result }) {
                log::error!("❌ Failed to deliver response: {}", e);
            }

            ctx_clone.request_repaint();
        });
    }

    /// Applies finished turns. Called from the UI thread every frame.
    pub fn process_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_receiver.try_recv() {
            self.conversation
                .finish_turn(&outcome.text, outcome.result, self.analytics.as_ref());
        }
    }
}

impl eframe::App for HealthConnectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.init_style(ctx);
        self.load_avatar(ctx);
        self.process_outcomes();

        let picked_language = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let view = header::HeaderView {
                    title: &self.config.assistant_name,
                    avatar: self.avatar_texture.as_ref(),
                    initials: &self.config.avatar_initials,
                    signed_in_as: self.conversation.user_profile().map(|p| p.name.as_str()),
                    transferring_to_human: self.conversation.is_transferring_to_human(),
                    language: self.conversation.language(),
                };
                let picked = header::draw_header(ui, &view);
                ui.add_space(6.0);
                picked
            })
            .inner;

        let can_send = self.conversation.can_send();
        let submitted = egui::TopBottomPanel::bottom("composer")
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let submitted = chat::draw_composer(ui, self.conversation.input_mut(), can_send);
                ui.add_space(6.0);
                submitted
            })
            .inner;

        let quick_reply = egui::CentralPanel::default()
            .show(ctx, |ui| {
                chat::draw_messages(ui, self.conversation.messages(), self.conversation.is_loading())
            })
            .inner;

        if let Some(language) = picked_language {
            self.conversation.set_language(language);
        }

        if let Some(option) = quick_reply {
            self.send_message(ctx, option);
        } else if submitted {
            if let Some(text) = self.conversation.take_input() {
                self.send_message(ctx, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::KeywordResponder;
    use crate::core::{ConversationContext, Language, NoopAnalytics};
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            assistant_name: "Test".to_string(),
            avatar_initials: "HC".to_string(),
            avatar_path: PathBuf::from("missing.png"),
            default_language: Language::French,
            analytics_enabled: false,
            window_width: 400.0,
            window_height: 600.0,
        }
    }

    struct PanickingProvider;

    impl ResponseProvider for PanickingProvider {
        fn respond(&self, _text: &str, _context: &ConversationContext) -> anyhow::Result<ResolvedResponse> {
            panic!("provider crashed");
        }
    }

    fn test_app(provider: Arc<dyn ResponseProvider>, rt: &tokio::runtime::Runtime) -> HealthConnectApp {
        HealthConnectApp::new(
            test_config(),
            provider,
            Box::new(NoopAnalytics),
            rt.handle().clone(),
        )
    }

    #[test]
    fn test_panicking_provider_leaves_error_bubble_and_unlocks() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(Arc::new(PanickingProvider), &rt);
        let ctx = egui::Context::default();

        app.send_message(&ctx, "hello".to_string());
        let outcome = app.outcome_receiver.recv().unwrap();
        assert!(outcome.result.is_err());
        app.conversation
            .finish_turn(&outcome.text, outcome.result, app.analytics.as_ref());

        assert!(!app.conversation.is_loading());
        let last = app.conversation.messages().last().unwrap();
        assert!(last.is_error);
        assert_eq!(app.conversation.messages().len(), 3);

        // The next submission is accepted again
        app.send_message(&ctx, "hello again".to_string());
        assert_eq!(app.conversation.messages().len(), 4);
        assert!(app.conversation.is_loading());
    }

    #[test]
    fn test_background_turn_round_trip() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(Arc::new(KeywordResponder), &rt);
        let ctx = egui::Context::default();

        app.send_message(&ctx, "hello".to_string());
        assert!(app.conversation.is_loading());

        // Wait for the spawned task to report back
        let outcome = app.outcome_receiver.recv().unwrap();
        app.conversation
            .finish_turn(&outcome.text, outcome.result, app.analytics.as_ref());

        assert!(!app.conversation.is_loading());
        assert_eq!(
            app.conversation.messages().last().unwrap().text,
            "Bonjour! Comment puis-je vous aider aujourd'hui?"
        );
    }
}
