//! UI panel modules extracted from the app update loop.

/// Central editor panel: composer and read-only viewer.
mod editor_panel;
/// Bottom status bar content.
mod status_bar;
/// Top action bar: save, raw, new, share link, theme toggle.
mod toolbar;
