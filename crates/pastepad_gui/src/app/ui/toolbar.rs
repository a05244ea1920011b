//! Top action bar rendering.

use super::super::*;
use eframe::egui;

impl PastepadApp {
    pub(crate) fn render_toolbar(&mut self, ctx: &egui::Context, now: Instant, opacity: f32) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.set_opacity(opacity);

            let mut save_clicked = false;
            let mut new_clicked = false;
            let mut raw_clicked = false;
            let mut copy_clicked = false;
            let mut theme_clicked = false;

            ui.horizontal(|ui| {
                if self.view.is_none() {
                    let label = if self.save_in_flight { "Saving..." } else { "Save" };
                    save_clicked = ui
                        .add_enabled(self.can_save(), egui::Button::new(label))
                        .on_disabled_hover_text("Nothing to save")
                        .clicked();
                } else {
                    new_clicked = ui.button("New").clicked();
                    raw_clicked = ui
                        .add_enabled(self.can_view_raw(), egui::Button::new("Raw"))
                        .clicked();
                }

                if let Some(view) = &self.view {
                    let (text, label_opacity) = match &self.copy_animation {
                        Some(anim) if anim.shows_confirmation(now) => {
                            ("Copied!".to_string(), anim.opacity_at(now))
                        }
                        Some(anim) => (view.share_url.clone(), anim.opacity_at(now)),
                        None => (view.share_url.clone(), 1.0),
                    };
                    ui.scope(|ui| {
                        ui.set_opacity(opacity * label_opacity);
                        let label = egui::Label::new(egui::RichText::new(text).monospace())
                            .sense(egui::Sense::click());
                        if ui.add(label).on_hover_text("Copy share link").clicked() {
                            copy_clicked = true;
                        }
                    });
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme {
                        ThemeVariant::Dark => "Light theme",
                        ThemeVariant::Light => "Dark theme",
                    };
                    theme_clicked = ui.button(theme_label).clicked();
                });
            });

            if save_clicked {
                self.trigger_save();
            }
            if new_clicked {
                self.reset_to_composer();
            }
            if raw_clicked {
                self.trigger_raw(ctx);
            }
            if copy_clicked {
                self.trigger_copy_link(now);
            }
            if theme_clicked {
                self.toggle_theme(now);
            }
        });
    }
}
