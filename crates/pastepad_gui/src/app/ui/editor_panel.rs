//! Central editor panel: editable composer or read-only document viewer.

use super::super::*;
use eframe::egui;
use egui_extras::syntax_highlighting::{self, CodeTheme};
use pastepad_core::constants::EDITOR_PLACEHOLDER;

impl PastepadApp {
    pub(crate) fn render_editor(&mut self, ctx: &egui::Context, opacity: f32) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_opacity(opacity);

            let palette = style::palette(self.theme);
            let line_number_color = palette.line_number;
            let placeholder_color = palette.placeholder;
            let read_only = self.view.is_some();
            let language = self
                .view
                .as_ref()
                .and_then(|view| view.language_ext.clone());

            egui::ScrollArea::vertical()
                .id_salt("editor_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        let line_count = self.buffer.lines().count().max(1);
                        let gutter = (1..=line_count)
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join("\n");
                        ui.label(
                            egui::RichText::new(gutter)
                                .monospace()
                                .color(line_number_color),
                        );

                        if read_only {
                            let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
                            let language = language.unwrap_or_else(|| "txt".to_string());
                            let mut layouter =
                                |ui: &egui::Ui, text: &dyn egui::TextBuffer, wrap_width: f32| {
                                    let mut job = syntax_highlighting::highlight(
                                        ui.ctx(),
                                        ui.style(),
                                        &theme,
                                        &language,
                                        text.as_str(),
                                    );
                                    job.wrap.max_width = wrap_width;
                                    ui.fonts_mut(|f| f.layout_job(job))
                                };
                            // `&str` is a read-only TextBuffer; the text stays
                            // selectable without being editable.
                            let mut shown: &str = self.buffer.as_str();
                            ui.add(
                                egui::TextEdit::multiline(&mut shown)
                                    .code_editor()
                                    .frame(false)
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(24)
                                    .layouter(&mut layouter),
                            );
                        } else {
                            let edit = egui::TextEdit::multiline(&mut self.buffer)
                                .code_editor()
                                .lock_focus(true)
                                .frame(false)
                                .desired_width(f32::INFINITY)
                                .desired_rows(24)
                                .hint_text(
                                    egui::RichText::new(EDITOR_PLACEHOLDER)
                                        .color(placeholder_color),
                                );
                            let response = ui.add(edit);
                            if self.focus_editor_next {
                                response.request_focus();
                                self.focus_editor_next = false;
                            }
                        }
                    });
                });
        });
    }
}
