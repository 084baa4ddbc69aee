use crate::core::Language;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub avatar_initials: String,
    pub avatar_path: PathBuf,
    pub default_language: Language,
    pub analytics_enabled: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let default_language = match env::var("HEALTHCONNECT_LANGUAGE") {
            Ok(code) => code.parse::<Language>().unwrap_or_else(|e| {
                log::warn!("⚠️ {}, using English", e);
                Language::English
            }),
            Err(_) => Language::English,
        };

        let analytics_enabled = env::var("HEALTHCONNECT_ANALYTICS")
            .unwrap_or_else(|_| "true".to_string())
            .to_lowercase() != "false";

        let avatar_path = env::var("HEALTHCONNECT_AVATAR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/bot-avatar.png"));

        Self {
            assistant_name: "HealthConnect Assistant".to_string(),
            avatar_initials: "HC".to_string(),
            avatar_path,
            default_language,
            analytics_enabled,
            // Card layout: narrow and tall
            window_width: 448.0,
            window_height: 600.0,
        }
    }
}
