use eframe::egui;

use super::components::Components;
use super::theme::Theme;
use crate::store::{ChatMessage, Sender};
use crate::utils::Format;

/// Canned starter queries shown while the history is empty.
const SUGGESTED_QUERIES: [&str; 4] = [
    "Show me party dresses under ₹1000",
    "I want minimal elegant styles",
    "Find me cozy winter sweaters",
    "Show professional work clothes",
];

/// How many suggested products render under one reply.
const RENDERED_SUGGESTIONS: usize = 2;

/// Chat panel for talking to the shopping assistant.
pub struct ChatWidget {
    pub open: bool,
    pub input_text: String,
    pub typing: bool,
    pending_input: Option<String>,
    clear_requested: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self {
            open: false,
            input_text: String::new(),
            typing: false,
            pending_input: None,
            clear_requested: false,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, history: &[ChatMessage], theme: &Theme) {
        ui.horizontal(|ui| {
            ui.heading("✨ AI Shopping Assistant");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").on_hover_text("Close").clicked() {
                    self.open = false;
                }
                if ui.button("🗑").on_hover_text("Clear chat").clicked() {
                    self.clear_requested = true;
                }
            });
        });
        ui.label(
            egui::RichText::new("Ask me anything about our products!")
                .size(11.0)
                .color(theme.muted),
        );
        ui.separator();

        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 48.0)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if history.is_empty() {
                    self.render_suggestions(ui);
                } else {
                    for message in history {
                        Self::render_message(ui, message, theme);
                    }
                }

                if self.typing {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(egui::RichText::new("Assistant is typing…").color(theme.muted));
                    });
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            let input = ui.add_sized(
                [ui.available_width() - 60.0, 25.0],
                egui::TextEdit::singleline(&mut self.input_text).hint_text("Ask about products..."),
            );
            let send = ui.button("Send");

            let submitted = (input.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter)))
                || send.clicked();

            // blank submissions never reach the store or the interpreter
            if submitted && !Format::is_blank(&self.input_text) && !self.typing {
                self.pending_input = Some(self.input_text.trim().to_string());
                self.input_text.clear();
            }
        });
    }

    fn render_suggestions(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label("Hi! I'm your shopping assistant. Try asking me:");
        ui.add_space(4.0);
        for query in SUGGESTED_QUERIES {
            if ui.button(format!("\"{query}\"")).clicked() {
                self.input_text = query.to_string();
            }
        }
    }

    fn render_message(ui: &mut egui::Ui, message: &ChatMessage, theme: &Theme) {
        let icon = match message.sender {
            Sender::User => "👤",
            Sender::Assistant => "✨",
        };

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(icon);
                ui.vertical(|ui| {
                    ui.label(&message.text);
                    ui.label(
                        egui::RichText::new(Format::clock_time(&message.timestamp))
                            .size(10.0)
                            .color(theme.muted),
                    );
                });
            });
        });

        if let Some(products) = &message.products {
            for product in products.iter().take(RENDERED_SUGGESTIONS) {
                Components::suggested_product_strip(ui, product, theme);
            }
        }
        ui.add_space(4.0);
    }

    /// Take the query the user just submitted, if any.
    pub fn take_pending_input(&mut self) -> Option<String> {
        self.pending_input.take()
    }

    /// True once when the user asked to clear the history.
    pub fn take_clear_request(&mut self) -> bool {
        std::mem::take(&mut self.clear_requested)
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}
