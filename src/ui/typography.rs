//! タイポグラフィトークン
//!
//! フォントサイズ（font-size / line-height / letter-spacing の三つ組）と
//! 離散ウェイトの静的テーブル

use ratatui::style::Modifier;

/// フォントファミリーの優先順
pub const FONT_FAMILY: [&str; 6] = [
    "Inter",
    "system-ui",
    "Avenir",
    "Helvetica",
    "Arial",
    "sans-serif",
];

/// サイズステップごとの三つ組（単位は rem）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub font_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

/// フォントサイズステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::Xs,
        FontSize::Sm,
        FontSize::Md,
        FontSize::Lg,
        FontSize::Xl,
    ];

    /// ステップを三つ組へ解決
    pub const fn scale(self) -> TypeScale {
        match self {
            FontSize::Xs => TypeScale {
                font_size: 0.813,
                line_height: 1.0,
                letter_spacing: 0.02,
            },
            FontSize::Sm => TypeScale {
                font_size: 1.0,
                line_height: 1.5,
                letter_spacing: 0.02,
            },
            FontSize::Md => TypeScale {
                font_size: 1.25,
                line_height: 2.0,
                letter_spacing: 0.02,
            },
            FontSize::Lg => TypeScale {
                font_size: 1.625,
                line_height: 2.625,
                letter_spacing: 0.02,
            },
            FontSize::Xl => TypeScale {
                font_size: 2.063,
                line_height: 3.25,
                letter_spacing: 0.02,
            },
        }
    }
}

/// フォントウェイト（閉じた離散集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
}

impl FontWeight {
    pub const ALL: [FontWeight; 3] = [
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
    ];

    /// CSS 数値ウェイト
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
        }
    }

    /// 端末描画への近似
    ///
    /// 端末にウェイトの段階はないため Semibold のみ太字へ落とす
    pub const fn modifier(self) -> Modifier {
        match self {
            FontWeight::Regular | FontWeight::Medium => Modifier::empty(),
            FontWeight::Semibold => Modifier::BOLD,
        }
    }
}
