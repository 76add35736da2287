//! エラーハンドリングシステム
//!
//! アプリシェル全体で使用される統一されたエラー型とユーティリティを定義。
//! 致命的エラー（パニック）は端末を復旧させてから即座に終了する。

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug)]
pub enum SalutError {
    /// ブリッジ呼び出しエラー
    #[error("Bridge call failed")]
    Bridge(#[from] BridgeError),

    /// UI操作エラー
    #[error("UI operation failed")]
    Ui(#[from] UiError),
}

/// ブリッジ呼び出し固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// ホスト側がコマンドを拒否した
    #[error("Host rejected command {command}: {message}")]
    Host { command: String, message: String },

    /// ブリッジワーカーが停止しており呼び出せない
    #[error("Bridge worker is not running")]
    WorkerGone,
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Screen size too small: {width}x{height}")]
    ScreenTooSmall { width: u16, height: u16 },

    #[error("Rendering failed: {component}")]
    RenderingFailed { component: String },
}

pub type Result<T> = std::result::Result<T, SalutError>;

/// パニックハンドラを設定
///
/// raw mode のまま落ちると端末が壊れるため、復旧してから出力して終了する
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );

        let location = panic_info
            .location()
            .unwrap_or_else(|| std::panic::Location::caller());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}:{}: {}", location.file(), location.line(), message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_error_converts_to_salut_error() {
        let err: SalutError = BridgeError::WorkerGone.into();
        assert!(matches!(err, SalutError::Bridge(_)));
    }

    #[test]
    fn host_error_message_includes_command() {
        let err = BridgeError::Host {
            command: "greet".to_string(),
            message: "boom".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("greet"));
        assert!(text.contains("boom"));
    }
}
