//! UIモジュール
//!
//! セマンティックトークンと ratatui ベースの描画機能

pub mod layout;
pub mod renderer;
pub mod theme;
pub mod typography;

// 公開API
pub use layout::{AppLayout, LayoutManager};
pub use renderer::Renderer;
pub use theme::{
    BackgroundToken, BaseColor, BorderToken, ColorExpr, ColorToken, Hsl, IconToken, TextToken,
    Theme, ThemeMode,
};
pub use typography::{FontSize, FontWeight, TypeScale, FONT_FAMILY};
