/// Header: avatar, title, handoff status and language tabs
use crate::core::Language;
use eframe::egui;

pub const AVATAR_SIZE: f32 = 36.0;

const AVATAR_FILL: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const STATUS_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

pub struct HeaderView<'a> {
    pub title: &'a str,
    pub avatar: Option<&'a egui::TextureHandle>,
    pub initials: &'a str,
    pub signed_in_as: Option<&'a str>,
    pub transferring_to_human: bool,
    pub language: Language,
}

/// Renders the header row. Returns the clicked language tab, active one included.
pub fn draw_header(ui: &mut egui::Ui, view: &HeaderView<'_>) -> Option<Language> {
    let mut picked = None;

    ui.horizontal(|ui| {
        draw_avatar(ui, view.avatar, view.initials);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(view.title).strong());
            if let Some(name) = view.signed_in_as {
                ui.label(egui::RichText::new(format!("Signed in as {}", name)).small().weak());
            }
            if view.transferring_to_human {
                ui.label(
                    egui::RichText::new("Connecting to human agent...")
                        .small()
                        .color(STATUS_COLOR),
                );
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right_to_left, so iterate backwards to keep EN ES FR order
            for language in Language::ALL.iter().rev() {
                let selected = *language == view.language;
                if ui.selectable_label(selected, language.tab_label()).clicked() {
                    picked = Some(*language);
                }
            }
        });
    });

    picked
}

fn draw_avatar(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, initials: &str) {
    let size = egui::vec2(AVATAR_SIZE, AVATAR_SIZE);

    match texture {
        Some(texture) => {
            ui.add(
                egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size),
            );
        }
        None => {
            // Fallback: initials in a circle
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, AVATAR_FILL);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                initials,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }
    }
}
