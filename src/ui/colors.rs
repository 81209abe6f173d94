//! Shared chrome palette for the TUI.

use ratatui::style::Color;

// ── Panel chrome ────────────────────────────────────────────────────
pub const BORDER_FOCUSED: Color = Color::Cyan;
pub const BORDER_IDLE: Color = Color::DarkGray;
pub const HIGHLIGHT_BG: Color = Color::Rgb(60, 55, 50);
pub const HIGHLIGHT_FG: Color = Color::Rgb(255, 220, 150);

// ── Text ────────────────────────────────────────────────────────────
pub const PLACEHOLDER: Color = Color::DarkGray;
pub const LABEL_DIM: Color = Color::DarkGray;
pub const ACCENT_MUTED: Color = Color::Rgb(120, 120, 180);

// ── Status bar ──────────────────────────────────────────────────────
pub const STATUS_BG: Color = Color::DarkGray;
pub const STATUS_FG: Color = Color::White;
pub const STATUS_KEY: Color = Color::Rgb(255, 220, 150);
