// Application modules
mod ai;
mod config;
mod core;
mod logger;
mod ui;

use ai::KeywordResponder;
use config::Config;
use crate::core::{AnalyticsSink, LogAnalytics, NoopAnalytics};
use eframe::NativeOptions;
use std::sync::Arc;
use ui::HealthConnectApp;

fn main() -> Result<(), eframe::Error> {
    logger::init();
    log::info!("🚀 HealthConnect Assistant starting");

    // Runtime for the response step
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("❌ Failed to start tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::default();
    log::info!(
        "📁 Configuration loaded (language: {}, analytics: {})",
        config.default_language,
        config.analytics_enabled
    );
    let app_name = config.assistant_name.clone();

    let analytics: Box<dyn AnalyticsSink> = if config.analytics_enabled {
        Box::new(LogAnalytics)
    } else {
        Box::new(NoopAnalytics)
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&app_name)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    let handle = rt.handle().clone();

    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(HealthConnectApp::new(
                config,
                Arc::new(KeywordResponder),
                analytics,
                handle,
            )))
        }),
    )
}
