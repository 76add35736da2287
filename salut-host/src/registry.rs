//! コマンドレジストリ
//!
//! コマンド名をキーに JSON 引数付きハンドラへディスパッチするテーブル。
//! UI 側からは `invoke(コマンド名, 引数マップ)` の一回呼び出しとして見える。

use crate::commands;
use crate::error::{HostError, HostResult};
use crate::logging::DebugLogger;
use serde_json::Value;
use std::collections::HashMap;

/// コマンドハンドラ
///
/// 引数は JSON オブジェクト、結果は表示用テキスト
pub type CommandHandler = fn(&Value) -> HostResult<String>;

/// ホストコマンドテーブル
pub struct CommandRegistry {
    handlers: HashMap<&'static str, CommandHandler>,
    logger: Option<DebugLogger>,
}

impl CommandRegistry {
    /// 組み込みコマンドを登録したレジストリを作成
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
            logger: None,
        };
        registry.register("greet", commands::greet);
        registry
    }

    /// デバッグロガーを取り付ける
    pub fn with_logger(mut self, logger: DebugLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// コマンドを登録（同名は上書き）
    pub fn register(&mut self, name: &'static str, handler: CommandHandler) {
        self.handlers.insert(name, handler);
    }

    /// 登録済みコマンド名の一覧
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// コマンド名でディスパッチ
    ///
    /// 未登録の名前は `CommandNotFound` として呼び出し側へ返す
    pub fn dispatch(&self, command: &str, args: &Value) -> HostResult<String> {
        let handler = self
            .handlers
            .get(command)
            .copied()
            .ok_or_else(|| HostError::CommandNotFound {
                command: command.to_string(),
            })?;

        let result = handler(args);
        self.log_dispatch(command, args, &result);
        result
    }

    fn log_dispatch(&self, command: &str, args: &Value, result: &HostResult<String>) {
        let Some(logger) = &self.logger else {
            return;
        };
        if let Err(err) = logger.log_dispatch(command, args, result) {
            log::warn!("debug log write failed: {err}");
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn greet_is_registered_by_default() {
        let registry = CommandRegistry::new();
        assert!(registry.command_names().contains(&"greet"));
    }

    #[test]
    fn dispatch_greet_returns_greeting() {
        let registry = CommandRegistry::new();
        let reply = registry
            .dispatch("greet", &json!({ "name": "Ada" }))
            .expect("greet コマンドのディスパッチに失敗しました");
        assert_eq!(reply, "Hello, Ada!");
    }

    #[test]
    fn dispatch_unknown_command_fails() {
        let registry = CommandRegistry::new();
        let err = registry
            .dispatch("launch_missiles", &json!({}))
            .unwrap_err();
        assert_eq!(
            err,
            HostError::CommandNotFound {
                command: "launch_missiles".to_string()
            }
        );
    }

    #[test]
    fn dispatch_writes_one_log_line_per_call() {
        let temp = tempdir().unwrap();
        let log_path = temp.path().join("host.jsonl");
        let registry = CommandRegistry::new()
            .with_logger(DebugLogger::new(log_path.clone()).unwrap());

        registry
            .dispatch("greet", &json!({ "name": "Ada" }))
            .unwrap();
        let _ = registry.dispatch("nonexistent", &json!({}));

        let content = std::fs::read_to_string(log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"reply\":\"Hello, Ada!\""));
        assert!(lines[1].contains("Command not found"));
    }

    #[test]
    fn custom_command_can_be_registered() {
        fn ping(_args: &Value) -> HostResult<String> {
            Ok("pong".to_string())
        }

        let mut registry = CommandRegistry::new();
        registry.register("ping", ping);
        assert_eq!(registry.dispatch("ping", &json!({})).unwrap(), "pong");
    }
}
