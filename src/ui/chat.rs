/// Message list and composer rendering
use crate::core::Message;
use eframe::egui;

/// Constants for chat styling
pub const BUBBLE_MAX_WIDTH_RATIO: f32 = 0.8;
pub const BUBBLE_PADDING: i8 = 10;
pub const BUBBLE_ROUNDING: u8 = 10;
pub const MESSAGE_SPACING: f32 = 12.0;
pub const SEND_BUTTON_WIDTH: f32 = 56.0;
pub const INPUT_HEIGHT: f32 = 28.0;

const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const BOT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const ERROR_BUBBLE: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const BOT_TEXT: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const DOT_COLOR: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);

/// Fill and text color for a bubble. Errors override the sender colors.
pub fn bubble_colors(message: &Message) -> (egui::Color32, egui::Color32) {
    if message.is_error {
        (ERROR_BUBBLE, ERROR_TEXT)
    } else if message.is_user() {
        (USER_BUBBLE, egui::Color32::WHITE)
    } else {
        (BOT_BUBBLE, BOT_TEXT)
    }
}

/// Renders the scrolling transcript.
///
/// Returns the quick reply the user clicked, if any.
pub fn draw_messages(ui: &mut egui::Ui, messages: &[Message], is_loading: bool) -> Option<String> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                if let Some(option) = draw_message(ui, message) {
                    clicked = Some(option);
                }
                ui.add_space(MESSAGE_SPACING);
            }

            if is_loading {
                draw_typing_indicator(ui);
            }
        });

    clicked
}

fn draw_message(ui: &mut egui::Ui, message: &Message) -> Option<String> {
    let layout = if message.is_user() {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    let mut clicked = None;
    let (fill, text_color) = bubble_colors(message);

    ui.with_layout(layout, |ui| {
        let max_width = ui.available_width() * BUBBLE_MAX_WIDTH_RATIO;

        egui::Frame::new()
            .fill(fill)
            .corner_radius(egui::CornerRadius::same(BUBBLE_ROUNDING))
            .inner_margin(egui::Margin::same(BUBBLE_PADDING))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&message.text).color(text_color));

                    if !message.options.is_empty() {
                        ui.add_space(6.0);
                        ui.horizontal_wrapped(|ui| {
                            for option in &message.options {
                                if ui.button(option).clicked() {
                                    log::debug!("Quick reply clicked: {}", option);
                                    clicked = Some(option.clone());
                                }
                            }
                        });
                    }
                });
            });
    });

    clicked
}

/// Three bouncing dots in a bot bubble
pub fn draw_typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time) as f32;

    ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
        egui::Frame::new()
            .fill(BOT_BUBBLE)
            .corner_radius(egui::CornerRadius::same(BUBBLE_ROUNDING))
            .inner_margin(egui::Margin::same(BUBBLE_PADDING))
            .show(ui, |ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 14.0), egui::Sense::hover());
                for i in 0..3 {
                    let phase = time * 6.0 - i as f32 * 0.7;
                    let lift = phase.sin().max(0.0) * 3.0;
                    let center = egui::pos2(rect.min.x + 6.0 + i as f32 * 12.0, rect.center().y - lift);
                    ui.painter().circle_filled(center, 3.0, DOT_COLOR);
                }
            });
    });

    ui.ctx().request_repaint();
}

/// Renders mic button, text input and send button.
///
/// Returns true if the user pressed Enter or clicked send.
pub fn draw_composer(ui: &mut egui::Ui, input_text: &mut String, can_send: bool) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        // Voice input has no backend
        ui.button("🎤").on_hover_text("Voice input is not available yet");

        let input_width = ui.available_width() - SEND_BUTTON_WIDTH - ui.spacing().item_spacing.x;
        let response = ui.add_sized(
            [input_width, INPUT_HEIGHT],
            egui::TextEdit::singleline(input_text).hint_text("Type your message..."),
        );

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
            response.request_focus();
        }

        let send = ui.add_enabled(
            can_send,
            egui::Button::new("Send").min_size(egui::vec2(SEND_BUTTON_WIDTH, INPUT_HEIGHT)),
        );
        if send.clicked() {
            submit = true;
        }
    });

    submit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_colors_by_sender() {
        let user = Message::user("hi");
        let bot = Message::bot("hello", Vec::new());
        assert_eq!(bubble_colors(&user), (USER_BUBBLE, egui::Color32::WHITE));
        assert_eq!(bubble_colors(&bot), (BOT_BUBBLE, BOT_TEXT));
    }

    #[test]
    fn test_error_colors_override_bot_colors() {
        let error = Message::error("oops");
        assert_eq!(bubble_colors(&error), (ERROR_BUBBLE, ERROR_TEXT));
    }
}
