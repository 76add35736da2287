//! ホストデバッグログ
//!
//! コマンドディスパッチの記録を JSON Lines 形式で追記するロガー

use crate::error::HostResult;
use crate::options::ensure_parent_dir;
use serde::Serialize;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// 一回のディスパッチに対応するログレコード
///
/// 成功なら `reply`、失敗なら `error` のどちらか一方だけを持つ
#[derive(Debug, Serialize)]
struct DispatchRecord<'a> {
    ts: u128,
    command: &'a str,
    args: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// ディスパッチごとに一行ずつ書き足すデバッグロガー
pub struct DebugLogger {
    path: PathBuf,
}

impl DebugLogger {
    pub fn new(path: PathBuf) -> io::Result<Self> {
        ensure_parent_dir(&path)?;
        Ok(Self { path })
    }

    /// ディスパッチ結果を一行追記する
    pub fn log_dispatch(
        &self,
        command: &str,
        args: &Value,
        result: &HostResult<String>,
    ) -> io::Result<()> {
        let record = DispatchRecord {
            ts: timestamp_ms(),
            command,
            args,
            reply: result.as_ref().ok().map(String::as_str),
            error: result.as_ref().err().map(|err| err.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&record)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis())
        .unwrap_or_default()
}
