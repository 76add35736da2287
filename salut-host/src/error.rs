//! ホスト側エラー型
//!
//! コマンドディスパッチで発生するエラーの定義

use thiserror::Error;

/// ホストコマンド処理のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// コマンドテーブルに存在しないコマンド名
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    /// 引数マップの形式が不正
    #[error("Invalid arguments for {command}: {message}")]
    InvalidArgs { command: String, message: String },
}

pub type HostResult<T> = std::result::Result<T, HostError>;
