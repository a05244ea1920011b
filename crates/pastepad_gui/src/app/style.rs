//! Per-variant palettes and theme application for the egui app.
//!
//! Each variant owns a full palette; `apply_theme` sets every visual from an
//! explicit target, never by flipping individual colors in place.

use eframe::egui::{
    self, style::WidgetVisuals, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke,
    TextStyle, Visuals,
};
use pastepad_core::ThemeVariant;

/// Full color set a theme variant needs.
pub(super) struct Palette {
    pub bg: Color32,
    pub bg2: Color32,
    pub accent: Color32,
    pub border: Color32,
    pub scrollbar: Color32,
    pub scrollbar_active: Color32,
    pub placeholder: Color32,
    pub line_number: Color32,
    pub text: Color32,
    pub text_muted: Color32,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color32 {
    Color32::from_rgb(r, g, b)
}

pub(super) const DARK_PALETTE: Palette = Palette {
    bg: rgb(0x1d, 0x1f, 0x21),
    bg2: rgb(0x28, 0x2a, 0x2e),
    accent: rgb(0xf4, 0x7f, 0x98),
    border: rgb(0x37, 0x3b, 0x41),
    scrollbar: rgb(0x42, 0x46, 0x4d),
    scrollbar_active: rgb(0x5e, 0x64, 0x6d),
    placeholder: rgb(0x70, 0x75, 0x80),
    line_number: rgb(0x60, 0x66, 0x71),
    text: rgb(0xc5, 0xc8, 0xc6),
    text_muted: rgb(0x8a, 0x90, 0x99),
};

pub(super) const LIGHT_PALETTE: Palette = Palette {
    bg: rgb(0xff, 0xff, 0xff),
    bg2: rgb(0xf2, 0xf4, 0xf6),
    accent: rgb(0xd8, 0x4a, 0x6b),
    border: rgb(0xd9, 0xdd, 0xe1),
    scrollbar: rgb(0xc8, 0xcd, 0xd3),
    scrollbar_active: rgb(0xa6, 0xad, 0xb5),
    placeholder: rgb(0x9a, 0xa1, 0xaa),
    line_number: rgb(0xa0, 0xa6, 0xaf),
    text: rgb(0x1d, 0x1f, 0x21),
    text_muted: rgb(0x6b, 0x72, 0x7b),
};

pub(super) fn palette(variant: ThemeVariant) -> &'static Palette {
    match variant {
        ThemeVariant::Dark => &DARK_PALETTE,
        ThemeVariant::Light => &LIGHT_PALETTE,
    }
}

/// Apply the full visual style for `variant`.
///
/// Called whenever the resolved variant changes: once at startup for the
/// persisted preference, then on every toggle. The syntax highlighter picks
/// its own light/dark theme from the resulting visuals.
pub(super) fn apply_theme(ctx: &egui::Context, variant: ThemeVariant) {
    let palette = palette(variant);

    let mut style = (*ctx.style()).clone();
    style.visuals = match variant {
        ThemeVariant::Dark => Visuals::dark(),
        ThemeVariant::Light => Visuals::light(),
    };
    style.visuals.override_text_color = Some(palette.text);
    style.visuals.window_fill = palette.bg;
    style.visuals.panel_fill = palette.bg2;
    style.visuals.extreme_bg_color = palette.bg;
    style.visuals.faint_bg_color = palette.bg2;
    style.visuals.window_stroke = Stroke::new(1.0, palette.border);
    style.visuals.hyperlink_color = palette.accent;
    style.visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    style.visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    style.visuals.text_edit_bg_color = Some(palette.bg);

    // Buttons draw with `weak_bg_fill`, scrollbar handles with `bg_fill`.
    style.visuals.widgets.noninteractive = WidgetVisuals {
        bg_fill: palette.bg2,
        weak_bg_fill: palette.bg2,
        bg_stroke: Stroke::new(1.0, palette.border),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, palette.text_muted),
        expansion: 0.0,
    };
    style.visuals.widgets.inactive = WidgetVisuals {
        bg_fill: palette.scrollbar,
        weak_bg_fill: palette.bg2,
        bg_stroke: Stroke::new(1.0, palette.border),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, palette.text),
        expansion: 0.0,
    };
    style.visuals.widgets.hovered = WidgetVisuals {
        bg_fill: palette.scrollbar_active,
        weak_bg_fill: palette.accent.gamma_multiply(0.8),
        bg_stroke: Stroke::new(1.0, palette.accent),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, palette.bg),
        expansion: 0.5,
    };
    style.visuals.widgets.active = WidgetVisuals {
        bg_fill: palette.scrollbar_active,
        weak_bg_fill: palette.accent,
        bg_stroke: Stroke::new(1.0, palette.accent),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, palette.bg),
        expansion: 0.5,
    };
    style.visuals.widgets.open = WidgetVisuals {
        bg_fill: palette.bg2,
        weak_bg_fill: palette.accent,
        bg_stroke: Stroke::new(1.0, palette.accent),
        corner_radius: CornerRadius::same(4),
        fg_stroke: Stroke::new(1.0, palette.bg),
        expansion: 0.0,
    };

    style.spacing.window_margin = Margin::same(10);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.item_spacing = egui::vec2(10.0, 6.0);
    style.spacing.interact_size.y = 30.0;

    style
        .text_styles
        .insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace));
    style
        .text_styles
        .insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));

    ctx.set_style(style);
}
