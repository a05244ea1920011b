//! Bottom status bar rendering for errors and server metadata.

use super::super::*;
use eframe::egui;

impl PastepadApp {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context, opacity: f32) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        let accent = style::palette(self.theme).accent;
                        ui.label(egui::RichText::new(status).color(accent));
                    } else if self.load_in_flight {
                        ui.label("Loading...");
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(self.client.server().as_str())
                                .small()
                                .monospace(),
                        );
                        if let Some(label) = self
                            .view
                            .as_ref()
                            .and_then(|view| view.language_ext.as_deref())
                            .and_then(detect::language_label)
                        {
                            ui.separator();
                            ui.label(egui::RichText::new(label).small());
                        }
                        ui.separator();
                        ui.label(
                            egui::RichText::new(format!("{} chars", self.buffer.chars().count()))
                                .small(),
                        );
                    });
                });
            });
    }
}
