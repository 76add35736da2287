//! セマンティックカラーシステム
//!
//! (ロール, 状態) の閉じた列挙からカラー式への静的テーブル。
//! すべてのトークンは少数の基底 HSL 変数 + アルファ値で表現され、
//! 未知の (ロール, 状態) の組は型として存在できない。
//! テーブルはビルド時に確定し、実行時には一切変更されない。

use ratatui::style::{Color, Modifier, Style};

/// 基底 HSL 変数
///
/// CSS の `--light-100` などに相当する少数のベースカラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Light100,
    Light200,
    Light300,
    Light600,
    Dark800,
    Dark900,
    Brand,
}

impl BaseColor {
    /// 変数名（デバッグ・CSS 出力用）
    pub const fn name(self) -> &'static str {
        match self {
            BaseColor::Light100 => "light-100",
            BaseColor::Light200 => "light-200",
            BaseColor::Light300 => "light-300",
            BaseColor::Light600 => "light-600",
            BaseColor::Dark800 => "dark-800",
            BaseColor::Dark900 => "dark-900",
            BaseColor::Brand => "brand",
        }
    }
}

/// HSL 値（hue は度、saturation / lightness は 0.0〜1.0）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }
}

/// カラー式：基底変数と不透明度の組
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorExpr {
    pub base: BaseColor,
    pub alpha: f32,
}

impl ColorExpr {
    pub const fn solid(base: BaseColor) -> Self {
        Self { base, alpha: 1.0 }
    }

    pub const fn with_alpha(base: BaseColor, alpha: f32) -> Self {
        Self { base, alpha }
    }

    /// CSS 形式の式表現
    pub fn css(&self) -> String {
        if self.alpha >= 1.0 {
            format!("hsl(var(--{}))", self.base.name())
        } else {
            format!("hsl(var(--{}) / {})", self.base.name(), self.alpha)
        }
    }
}

/// テキストロールの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextToken {
    Default,
    Body,
    Primary,
    Secondary,
    Tertiary,
    Disabled,
    Button,
    Brand,
    BrandDisabled,
}

impl TextToken {
    pub const ALL: [TextToken; 9] = [
        TextToken::Default,
        TextToken::Body,
        TextToken::Primary,
        TextToken::Secondary,
        TextToken::Tertiary,
        TextToken::Disabled,
        TextToken::Button,
        TextToken::Brand,
        TextToken::BrandDisabled,
    ];
}

/// アイコンロールの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconToken {
    Default,
    Primary,
    Secondary,
    Tertiary,
    Disabled,
    Button,
    Brand,
    BrandDisabled,
}

impl IconToken {
    pub const ALL: [IconToken; 8] = [
        IconToken::Default,
        IconToken::Primary,
        IconToken::Secondary,
        IconToken::Tertiary,
        IconToken::Disabled,
        IconToken::Button,
        IconToken::Brand,
        IconToken::BrandDisabled,
    ];
}

/// 背景ロールの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundToken {
    Default,
    Base,
    Card,
    CardHover,
    CardPressed,
    Primary,
    Secondary,
    Hover,
    Pressed,
    Disabled,
    Brand,
    BrandHover,
    BrandPressed,
    BrandDisabled,
    Button,
    ButtonHover,
    ButtonPressed,
    ButtonDisabled,
    ButtonBrand,
}

impl BackgroundToken {
    pub const ALL: [BackgroundToken; 19] = [
        BackgroundToken::Default,
        BackgroundToken::Base,
        BackgroundToken::Card,
        BackgroundToken::CardHover,
        BackgroundToken::CardPressed,
        BackgroundToken::Primary,
        BackgroundToken::Secondary,
        BackgroundToken::Hover,
        BackgroundToken::Pressed,
        BackgroundToken::Disabled,
        BackgroundToken::Brand,
        BackgroundToken::BrandHover,
        BackgroundToken::BrandPressed,
        BackgroundToken::BrandDisabled,
        BackgroundToken::Button,
        BackgroundToken::ButtonHover,
        BackgroundToken::ButtonPressed,
        BackgroundToken::ButtonDisabled,
        BackgroundToken::ButtonBrand,
    ];
}

/// ボーダーロールの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderToken {
    Default,
    Base,
    Card,
    Primary,
    Secondary,
    Hover,
    Pressed,
    Disabled,
    Brand,
    BrandHover,
    BrandPressed,
    BrandDisabled,
}

impl BorderToken {
    pub const ALL: [BorderToken; 12] = [
        BorderToken::Default,
        BorderToken::Base,
        BorderToken::Card,
        BorderToken::Primary,
        BorderToken::Secondary,
        BorderToken::Hover,
        BorderToken::Pressed,
        BorderToken::Disabled,
        BorderToken::Brand,
        BorderToken::BrandHover,
        BorderToken::BrandPressed,
        BorderToken::BrandDisabled,
    ];
}

/// セマンティックカラートークン
///
/// ロール × 状態の閉じた直和。消費側はロール名でのみ色を参照する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorToken {
    Text(TextToken),
    Icon(IconToken),
    Background(BackgroundToken),
    Border(BorderToken),
}

impl ColorToken {
    /// トークンをカラー式へ解決
    ///
    /// match は網羅的。状態を追加してここを更新し忘れるとコンパイルが通らない。
    pub const fn resolve(self) -> ColorExpr {
        use BaseColor::*;
        match self {
            ColorToken::Text(token) => match token {
                TextToken::Default => ColorExpr::solid(Dark800),
                TextToken::Body => ColorExpr::with_alpha(Dark800, 0.95),
                TextToken::Primary => ColorExpr::solid(Dark800),
                TextToken::Secondary => ColorExpr::with_alpha(Dark800, 0.70),
                TextToken::Tertiary => ColorExpr::with_alpha(Dark800, 0.50),
                TextToken::Disabled => ColorExpr::with_alpha(Dark800, 0.22),
                TextToken::Button => ColorExpr::solid(Light100),
                TextToken::Brand => ColorExpr::with_alpha(Brand, 0.95),
                TextToken::BrandDisabled => ColorExpr::with_alpha(Brand, 0.35),
            },
            ColorToken::Icon(token) => match token {
                IconToken::Default => ColorExpr::solid(Dark800),
                IconToken::Primary => ColorExpr::with_alpha(Dark800, 0.90),
                IconToken::Secondary => ColorExpr::with_alpha(Dark800, 0.60),
                IconToken::Tertiary => ColorExpr::with_alpha(Dark800, 0.40),
                IconToken::Disabled => ColorExpr::with_alpha(Dark800, 0.15),
                IconToken::Button => ColorExpr::solid(Light100),
                IconToken::Brand => ColorExpr::with_alpha(Brand, 0.90),
                IconToken::BrandDisabled => ColorExpr::with_alpha(Brand, 0.50),
            },
            ColorToken::Background(token) => match token {
                BackgroundToken::Default => ColorExpr::solid(Light100),
                BackgroundToken::Base => ColorExpr::solid(Light200),
                BackgroundToken::Card => ColorExpr::solid(Light100),
                BackgroundToken::CardHover => ColorExpr::solid(Light200),
                BackgroundToken::CardPressed => ColorExpr::solid(Light300),
                BackgroundToken::Primary => ColorExpr::with_alpha(Dark800, 0.08),
                BackgroundToken::Secondary => ColorExpr::with_alpha(Dark800, 0.03),
                BackgroundToken::Hover => ColorExpr::with_alpha(Dark800, 0.12),
                BackgroundToken::Pressed => ColorExpr::with_alpha(Dark800, 0.15),
                BackgroundToken::Disabled => ColorExpr::with_alpha(Dark800, 0.04),
                BackgroundToken::Brand => ColorExpr::with_alpha(Brand, 0.12),
                BackgroundToken::BrandHover => ColorExpr::with_alpha(Brand, 0.18),
                BackgroundToken::BrandPressed => ColorExpr::with_alpha(Brand, 0.22),
                BackgroundToken::BrandDisabled => ColorExpr::with_alpha(Brand, 0.06),
                BackgroundToken::Button => ColorExpr::solid(Dark800),
                BackgroundToken::ButtonHover => ColorExpr::with_alpha(Dark900, 0.90),
                BackgroundToken::ButtonPressed => ColorExpr::solid(Dark900),
                BackgroundToken::ButtonDisabled => ColorExpr::with_alpha(Dark800, 0.15),
                BackgroundToken::ButtonBrand => ColorExpr::solid(Brand),
            },
            ColorToken::Border(token) => match token {
                BorderToken::Default => ColorExpr::with_alpha(Light600, 0.20),
                BorderToken::Base => ColorExpr::with_alpha(Light600, 0.15),
                BorderToken::Card => ColorExpr::with_alpha(Light600, 0.25),
                BorderToken::Primary => ColorExpr::with_alpha(Dark800, 0.15),
                BorderToken::Secondary => ColorExpr::with_alpha(Dark800, 0.08),
                BorderToken::Hover => ColorExpr::with_alpha(Dark800, 0.17),
                BorderToken::Pressed => ColorExpr::with_alpha(Dark800, 0.18),
                BorderToken::Disabled => ColorExpr::with_alpha(Dark800, 0.05),
                BorderToken::Brand => ColorExpr::with_alpha(Brand, 0.55),
                BorderToken::BrandHover => ColorExpr::with_alpha(Brand, 0.60),
                BorderToken::BrandPressed => ColorExpr::with_alpha(Brand, 0.63),
                BorderToken::BrandDisabled => ColorExpr::with_alpha(Brand, 0.15),
            },
        }
    }
}

/// テーマモード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// 基底変数の実体値
///
/// ダークモードは基底変数の再定義であり、トークンテーブル側は変わらない
pub const fn base_hsl(mode: ThemeMode, base: BaseColor) -> Hsl {
    match mode {
        ThemeMode::Light => match base {
            BaseColor::Light100 => Hsl::new(0.0, 0.0, 1.0),
            BaseColor::Light200 => Hsl::new(220.0, 0.14, 0.96),
            BaseColor::Light300 => Hsl::new(220.0, 0.13, 0.91),
            BaseColor::Light600 => Hsl::new(220.0, 0.09, 0.46),
            BaseColor::Dark800 => Hsl::new(222.0, 0.18, 0.12),
            BaseColor::Dark900 => Hsl::new(222.0, 0.24, 0.07),
            BaseColor::Brand => Hsl::new(255.0, 0.85, 0.65),
        },
        ThemeMode::Dark => match base {
            BaseColor::Light100 => Hsl::new(222.0, 0.18, 0.10),
            BaseColor::Light200 => Hsl::new(222.0, 0.16, 0.14),
            BaseColor::Light300 => Hsl::new(222.0, 0.14, 0.18),
            BaseColor::Light600 => Hsl::new(220.0, 0.09, 0.60),
            BaseColor::Dark800 => Hsl::new(220.0, 0.14, 0.96),
            BaseColor::Dark900 => Hsl::new(0.0, 0.0, 1.0),
            BaseColor::Brand => Hsl::new(255.0, 0.85, 0.70),
        },
    }
}

/// HSL から sRGB へ変換
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// テーマ
///
/// トークンを端末で描画可能な具体色へ落とす。半透明トークンは
/// サーフェス色（背景 default）へアルファ合成した RGB になる。
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// トークンを具体色へ解決
    pub fn color(&self, token: ColorToken) -> Color {
        let expr = token.resolve();
        let fg = hsl_to_rgb(base_hsl(self.mode, expr.base));
        let surface = hsl_to_rgb(base_hsl(
            self.mode,
            ColorToken::Background(BackgroundToken::Default).resolve().base,
        ));
        let (r, g, b) = composite(fg, surface, expr.alpha);
        Color::Rgb(r, g, b)
    }

    /// 前景・背景トークンの組から Style を作る
    pub fn style(&self, fg: ColorToken, bg: ColorToken) -> Style {
        Style::default().fg(self.color(fg)).bg(self.color(bg))
    }

    /// 前景のみの Style
    pub fn fg_style(&self, fg: ColorToken) -> Style {
        Style::default().fg(self.color(fg))
    }

    /// 強調（brand テキスト）用の Style
    pub fn brand_style(&self) -> Style {
        self.fg_style(ColorToken::Text(TextToken::Brand))
            .add_modifier(Modifier::BOLD)
    }
}

/// アルファ合成（fg over bg）
fn composite(fg: (u8, u8, u8), bg: (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
    let a = alpha.clamp(0.0, 1.0);
    let blend = |f: u8, b: u8| -> u8 {
        (f32::from(f) * a + f32::from(b) * (1.0 - a)).round() as u8
    };
    (blend(fg.0, bg.0), blend(fg.1, bg.1), blend(fg.2, bg.2))
}
