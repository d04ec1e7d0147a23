use eframe::egui;

/// Color theme for the storefront.
#[derive(Debug, Clone)]
pub struct Theme {
    pub is_dark: bool,
    /// Accent used for prices and primary actions
    pub accent: egui::Color32,
    pub accent_alt: egui::Color32,
    pub background: egui::Color32,
    pub muted: egui::Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            accent: egui::Color32::from_rgb(192, 132, 252),
            accent_alt: egui::Color32::from_rgb(96, 165, 250),
            background: egui::Color32::from_rgb(24, 24, 27),
            muted: egui::Color32::GRAY,
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            accent: egui::Color32::from_rgb(147, 51, 234),
            accent_alt: egui::Color32::from_rgb(37, 99, 235),
            background: egui::Color32::WHITE,
            muted: egui::Color32::DARK_GRAY,
        }
    }

    /// Apply theme to context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.widgets.hovered.bg_fill = self.accent_alt;
        visuals.widgets.active.bg_fill = self.accent;
        visuals.selection.bg_fill = self.accent;

        ctx.set_visuals(visuals);
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn toggled(&self) -> Self {
        if self.is_dark {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
