use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub mod chat;
pub mod components;
pub mod state;
pub mod theme;

use crate::assistant::responder::{Reply, Responder};
use crate::assistant::ShoppingAssistant;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::store::{ChatMessage, ShopAction, Store};

/// Main storefront application
pub struct ShopMuseApp {
    config: AppConfig,
    store: Store,
    responder: Responder,
    replies: mpsc::UnboundedReceiver<Reply>,
    chat: chat::ChatWidget,
    ui_state: state::UiState,
    theme: theme::Theme,
}

impl ShopMuseApp {
    /// Create the application. Must run inside a tokio runtime: reply
    /// tasks are spawned onto the current handle.
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let mut store = Store::new();
        store.dispatch(ShopAction::SetProducts(catalog.products().to_vec()));

        let assistant = Arc::new(ShoppingAssistant::new(catalog));
        let (responder, replies) = Responder::new(
            assistant,
            config.assistant.reply_delay_min_ms,
            config.assistant.reply_delay_max_ms,
        );

        let theme = if config.ui.enable_dark_mode {
            theme::Theme::dark()
        } else {
            theme::Theme::light()
        };

        info!(products = store.state().products.len(), "storefront initialized");

        Self {
            config,
            store,
            responder,
            replies,
            chat: chat::ChatWidget::new(),
            ui_state: state::UiState::default(),
            theme,
        }
    }

    /// Apply finished replies; anything from a torn-down session is dropped.
    fn drain_replies(&mut self) {
        while let Ok(reply) = self.replies.try_recv() {
            if !self.responder.is_live(&reply) {
                debug!(session = reply.session, "dropping reply from stale session");
                continue;
            }

            self.chat.typing = false;
            self.ui_state.status_message =
                Some(format!("{} products shown", reply.result.products.len()));

            self.store.dispatch(ShopAction::AddChatMessage(ChatMessage::assistant(
                reply.result.message.clone(),
                reply.result.products.clone(),
            )));
            self.store
                .dispatch(ShopAction::FilterProducts(reply.result.products));
        }
    }

    fn handle_chat_events(&mut self) {
        if let Some(query) = self.chat.take_pending_input() {
            self.store
                .dispatch(ShopAction::SetSearchQuery(query.clone()));
            self.store
                .dispatch(ShopAction::AddChatMessage(ChatMessage::user(query.clone())));
            self.chat.typing = true;
            self.responder.submit(query);
        }

        if self.chat.take_clear_request() {
            self.store.dispatch(ShopAction::ClearChat);
            self.responder.reset();
            self.chat.typing = false;
        }
    }

    /// Tear the chat session down so a late reply can never land on stale
    /// state.
    fn close_chat(&mut self) {
        self.chat.open = false;
        self.chat.typing = false;
        self.responder.reset();
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("🛍 ShopMuse");
            ui.add_space(16.0);

            let search = ui.add(
                egui::TextEdit::singleline(&mut self.ui_state.search_text)
                    .hint_text("Search products...")
                    .desired_width(200.0),
            );
            if search.changed() {
                self.store.dispatch(ShopAction::SetSearchQuery(
                    self.ui_state.search_text.clone(),
                ));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(if self.theme.is_dark() { "🌙" } else { "☀" })
                    .clicked()
                {
                    self.theme = self.theme.toggled();
                }

                let chat_label = if self.chat.open {
                    "✖ Close assistant"
                } else {
                    "💬 Ask the assistant"
                };
                if ui.button(chat_label).clicked() {
                    if self.chat.open {
                        self.close_chat();
                    } else {
                        self.chat.open = true;
                    }
                }
            });
        });
    }

    fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} of {} products",
                self.store.state().filtered_products.len(),
                self.store.state().products.len()
            ));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(status) = &self.ui_state.status_message {
                    ui.label(status);
                }
            });
        });
    }
}

impl eframe::App for ShopMuseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply(ctx);
        self.drain_replies();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.render_top_bar(ui));
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.render_status_bar(ui));

        if self.chat.open {
            egui::SidePanel::right("chat_panel")
                .default_width(self.config.ui.chat_panel_width)
                .show(ctx, |ui| {
                    let history = self.store.state().chat_history.as_slice();
                    let start = history
                        .len()
                        .saturating_sub(self.config.ui.chat_history_limit);
                    self.chat.render(ui, &history[start..], &self.theme);
                });

            // the widget's own close button flips the flag; finish teardown
            if !self.chat.open {
                self.close_chat();
            }
        }

        self.handle_chat_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Featured Collection");
                    ui.label(
                        "Discover our handpicked selection of trending fashion items. \
                         Use the assistant to find exactly what you're looking for!",
                    );
                    ui.add_space(8.0);
                    components::Components::product_grid(
                        ui,
                        &self.store.state().filtered_products,
                        &self.theme,
                    );
                });
        });

        if self.chat.typing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(state_json) = serde_json::to_string(&self.ui_state) {
            storage.set_string("ui_state", state_json);
        }
    }
}
