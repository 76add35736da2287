//! ホストオプション
//!
//! デバッグログ出力先などホスト側の起動設定

use std::path::{Path, PathBuf};

/// ホストコマンドテーブルの起動オプション
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    /// デバッグログ出力先（未指定時は `~/.salut-log/host.jsonl`）
    pub debug_log_path: Option<PathBuf>,
}

impl HostOptions {
    pub fn resolve_log_path(&self) -> Option<PathBuf> {
        match &self.debug_log_path {
            Some(path) => Some(path.clone()),
            None => default_log_path(),
        }
    }

}

fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".salut-log").join("host.jsonl"))
}

/// ヘルパー：親ディレクトリを作成
pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
