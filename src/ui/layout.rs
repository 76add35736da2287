//! TUIレイアウト管理
//!
//! ratatuiベースの画面レイアウト計算

use crate::error::{SalutError, UiError};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 最小必要サイズ
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// アプリシェル全体のレイアウト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    /// ヘッダ（タイトル + サブタイトル）
    pub header: Rect,
    /// 名前入力フォーム（ボーダー付き 3 行）
    pub form: Rect,
    /// 挨拶・エラー表示行
    pub message: Rect,
    /// ステータスライン（最下段 1 行）
    pub status: Rect,
    /// 全体エリア
    pub total: Rect,
}

/// レイアウトマネージャー
#[derive(Debug, Default)]
pub struct LayoutManager;

impl LayoutManager {
    pub fn new() -> Self {
        Self
    }

    /// 画面全体からレイアウトを計算
    ///
    /// 最小サイズ未満は設定ミス扱いでエラーにする
    pub fn compute(&self, total: Rect) -> Result<AppLayout, SalutError> {
        if total.width < MIN_WIDTH || total.height < MIN_HEIGHT {
            return Err(SalutError::Ui(UiError::ScreenTooSmall {
                width: total.width,
                height: total.height,
            }));
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(total);

        Ok(AppLayout {
            header: rows[0],
            form: rows[1],
            message: rows[2],
            status: rows[4],
            total,
        })
    }
}
