//! The Pastepad application state and frame loop.
//!
//! All mutable state lives in `PastepadApp`; the backend worker, theme store
//! and API client are injected at construction so the state transitions can be
//! driven headlessly in tests.

mod animation;
mod style;
mod ui;

#[cfg(test)]
mod tests;

use crate::backend::{spawn_backend, BackendHandle, ClientCmd, ClientEvent};
use animation::{CopyAnimation, ThemeFade};
use eframe::egui;
use pastepad_core::constants::WINDOW_TITLE;
use pastepad_core::models::Document;
use pastepad_core::text::is_content_empty;
use pastepad_core::{detect, ApiClient, ClientError, Config, ThemeStore, ThemeVariant, ABOUT_KEY};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [900.0, 640.0];
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];

/// A document loaded read-only into the viewer.
struct LoadedView {
    key: String,
    /// Display extension of the requested path, as a syntax hint.
    language_ext: Option<String>,
    share_url: String,
    raw_url: String,
}

pub struct PastepadApp {
    client: ApiClient,
    backend: BackendHandle,
    theme_store: ThemeStore,
    theme: ThemeVariant,
    /// Variant last pushed into the egui style, `None` before the first frame.
    theme_applied: Option<ThemeVariant>,
    buffer: String,
    view: Option<LoadedView>,
    save_in_flight: bool,
    load_in_flight: bool,
    /// Status-bar message, e.g. `Error: TOO_FAST`.
    status: Option<String>,
    window_title: String,
    applied_title: Option<String>,
    copy_animation: Option<CopyAnimation>,
    theme_fade: Option<ThemeFade>,
    /// Text queued for the clipboard, flushed once per frame.
    clipboard_outgoing: Option<String>,
    focus_editor_next: bool,
}

impl PastepadApp {
    /// Build the app. The persisted theme is resolved before any load is
    /// issued, so the first frame already renders in the preferred variant.
    ///
    /// # Errors
    /// `InvalidUrl` or `Transport` when the configured server URL is unusable.
    pub fn new(config: Config, initial: Option<String>) -> Result<Self, ClientError> {
        let client = ApiClient::new(&config.server_url)?;
        let theme_store = ThemeStore::new(config.theme_file());
        let theme = theme_store.load();
        let backend = spawn_backend(client.clone());

        let mut app = Self {
            client,
            backend,
            theme_store,
            theme,
            theme_applied: None,
            buffer: String::new(),
            view: None,
            save_in_flight: false,
            load_in_flight: false,
            status: None,
            window_title: WINDOW_TITLE.to_string(),
            applied_title: None,
            copy_animation: None,
            theme_fade: None,
            clipboard_outgoing: None,
            focus_editor_next: true,
        };
        if let Some(path) = initial {
            app.request_load(path);
        }
        Ok(app)
    }

    fn request_load(&mut self, path: String) {
        debug!("requesting document {}", path);
        self.load_in_flight = true;
        let _ = self.backend.cmd_tx.send(ClientCmd::Load { path });
    }

    /// Save is available only in the composer, with content, no save pending.
    fn can_save(&self) -> bool {
        self.view.is_none() && !self.save_in_flight && !is_content_empty(&self.buffer)
    }

    /// The raw view exists for every document except the seeded about page.
    fn can_view_raw(&self) -> bool {
        self.view.as_ref().is_some_and(|view| view.key != ABOUT_KEY)
    }

    fn trigger_save(&mut self) {
        if !self.can_save() {
            return;
        }
        self.save_in_flight = true;
        self.status = None;
        let _ = self.backend.cmd_tx.send(ClientCmd::Save {
            content: self.buffer.clone(),
        });
    }

    fn trigger_raw(&mut self, ctx: &egui::Context) {
        if !self.can_view_raw() {
            return;
        }
        if let Some(view) = &self.view {
            ctx.open_url(egui::OpenUrl::new_tab(view.raw_url.clone()));
        }
    }

    /// Copy the share URL and start the confirmation animation. A no-op while
    /// a previous run is still playing, and outside viewer state.
    fn trigger_copy_link(&mut self, now: Instant) {
        if self.copy_animation.is_some() {
            return;
        }
        if let Some(view) = &self.view {
            self.clipboard_outgoing = Some(view.share_url.clone());
            self.copy_animation = Some(CopyAnimation::new(now));
        }
    }

    /// Start the theme crossfade; the variant flips and persists at its
    /// midpoint. Ignored while a fade is already running.
    fn toggle_theme(&mut self, now: Instant) {
        if self.theme_fade.is_none() {
            self.theme_fade = Some(ThemeFade::new(now));
        }
    }

    fn advance_animations(&mut self, now: Instant) {
        if let Some(anim) = self.copy_animation {
            if anim.finished(now) {
                self.copy_animation = None;
            }
        }
        if let Some(fade) = &mut self.theme_fade {
            if fade.reached_midpoint(now) && !fade.switched {
                fade.switched = true;
                self.theme = self.theme.toggled();
                self.theme_store.store(self.theme);
            }
            if fade.finished(now) {
                self.theme_fade = None;
            }
        }
    }

    fn apply_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::Saved { document } => {
                self.save_in_flight = false;
                let key = document.key.clone();
                self.enter_view(&key, document);
            }
            ClientEvent::Loaded { path, document } => {
                self.load_in_flight = false;
                self.enter_view(&path, document);
            }
            ClientEvent::SaveFailed { message } => {
                self.save_in_flight = false;
                self.status = Some(format!("Error: {message}"));
            }
            ClientEvent::LoadRateLimited { message } => {
                self.load_in_flight = false;
                self.status = Some(format!("Error: {message}"));
            }
            ClientEvent::LoadFailed { path } => {
                self.load_in_flight = false;
                info!("document {} unavailable, returning to composer", path);
                self.reset_to_composer();
            }
        }
    }

    /// Enter viewer state for `document`. `path_hint` is the originally
    /// requested path, carrying the display extension when one was given.
    fn enter_view(&mut self, path_hint: &str, document: Document) {
        let language_ext = detect::display_extension(path_hint).map(str::to_string);
        self.window_title = format!("{} - {}", WINDOW_TITLE, document.key);
        self.buffer = document.content;
        self.view = Some(LoadedView {
            share_url: self.client.share_url(&document.key),
            raw_url: self.client.raw_url(&document.key),
            key: document.key,
            language_ext,
        });
        self.status = None;
    }

    /// Back to the blank composer.
    fn reset_to_composer(&mut self) {
        self.buffer.clear();
        self.view = None;
        self.status = None;
        self.copy_animation = None;
        self.window_title = WINDOW_TITLE.to_string();
        self.focus_editor_next = true;
    }

    fn ensure_theme(&mut self, ctx: &egui::Context) {
        if self.theme_applied != Some(self.theme) {
            style::apply_theme(ctx, self.theme);
            self.theme_applied = Some(self.theme);
        }
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        if self.applied_title.as_deref() != Some(self.window_title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title.clone()));
            self.applied_title = Some(self.window_title.clone());
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (command, shift, save, new, raw) = ctx.input(|i| {
            (
                i.modifiers.command,
                i.modifiers.shift,
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::R),
            )
        });
        if !command {
            return;
        }
        if save && !shift {
            self.trigger_save();
        }
        if new && !shift {
            self.reset_to_composer();
        }
        if raw && shift {
            self.trigger_raw(ctx);
        }
    }

    fn animations_active(&self) -> bool {
        self.copy_animation.is_some() || self.theme_fade.is_some()
    }
}

impl eframe::App for PastepadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.advance_animations(now);
        self.ensure_theme(ctx);
        self.drain_backend_events();
        self.sync_window_title(ctx);

        if let Some(text) = self.clipboard_outgoing.take() {
            ctx.send_cmd(egui::OutputCommand::CopyText(text));
        }

        self.handle_shortcuts(ctx);

        let ui_opacity = self
            .theme_fade
            .map(|fade| fade.opacity_at(now))
            .unwrap_or(1.0);

        self.render_toolbar(ctx, now, ui_opacity);
        self.render_status_bar(ctx, ui_opacity);
        self.render_editor(ctx, ui_opacity);

        if self.animations_active() || self.save_in_flight || self.load_in_flight {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
