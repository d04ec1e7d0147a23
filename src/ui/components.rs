use eframe::egui;

use super::theme::Theme;
use crate::catalog::Product;
use crate::utils::Format;

const CARD_WIDTH: f32 = 220.0;
const GRID_COLUMNS: usize = 3;
const DESCRIPTION_CHARS: usize = 72;

/// Catalog rendering helpers
pub struct Components;

impl Components {
    /// Product grid, `GRID_COLUMNS` cards per row
    pub fn product_grid(ui: &mut egui::Ui, products: &[Product], theme: &Theme) {
        if products.is_empty() {
            ui.label("No products match the current filter. Ask the assistant for something else!");
            return;
        }

        for row in products.chunks(GRID_COLUMNS) {
            ui.horizontal_top(|ui| {
                for product in row {
                    Self::product_card(ui, product, theme);
                }
            });
            ui.add_space(8.0);
        }
    }

    fn product_card(ui: &mut egui::Ui, product: &Product, theme: &Theme) {
        ui.group(|ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&product.name).strong());

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(Format::rupees(product.price))
                            .color(theme.accent)
                            .strong(),
                    );
                    if product.is_discounted() {
                        if let Some(original) = product.original_price {
                            ui.label(
                                egui::RichText::new(Format::rupees(original))
                                    .strikethrough()
                                    .color(theme.muted)
                                    .size(11.0),
                            );
                        }
                    }
                });

                if let Some(rating) = product.rating {
                    let reviews = product.reviews.unwrap_or(0);
                    ui.label(
                        egui::RichText::new(format!("★ {rating:.1} ({reviews})"))
                            .size(11.0)
                            .color(theme.muted),
                    );
                }

                ui.label(
                    egui::RichText::new(format!(
                        "{} · {}",
                        product.category,
                        product.style.join(", ")
                    ))
                    .size(11.0)
                    .color(theme.muted),
                );

                ui.label(
                    egui::RichText::new(Format::truncate(&product.description, DESCRIPTION_CHARS))
                        .size(12.0),
                );
            });
        });
    }

    /// Compact one-line product suggestion, used inside chat replies
    pub fn suggested_product_strip(ui: &mut egui::Ui, product: &Product, theme: &Theme) {
        ui.horizontal(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(&product.name).size(12.0).strong());
            ui.label(
                egui::RichText::new(Format::rupees(product.price))
                    .size(12.0)
                    .color(theme.accent),
            );
        });
    }
}
