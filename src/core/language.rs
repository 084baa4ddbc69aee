use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages offered by the switcher in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    /// Tab label.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Spanish => "ES",
            Language::French => "FR",
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Language::English => "Hello! How can I help you today?",
            Language::Spanish => "¡Hola! ¿Cómo puedo ayudarte hoy?",
            Language::French => "Bonjour! Comment puis-je vous aider aujourd'hui?",
        }
    }

    /// Bot line posted after the user switches to this language.
    pub fn change_confirmation(&self) -> &'static str {
        match self {
            Language::English => "Language changed to English.",
            Language::Spanish => "Idioma cambiado a Español.",
            Language::French => "Langue changée en Français.",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "fr" => Ok(Language::French),
            other => Err(anyhow::anyhow!("Unsupported language code '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" ES ".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("Fr".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_parse_unknown_language_fails() {
        let err = "de".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, "\"fr\"");
    }
}
