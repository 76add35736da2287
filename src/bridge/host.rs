//! インプロセスホストエンドポイント
//!
//! `salut-host` のコマンドテーブルをブリッジの呼び出し先として適合させる。
//! ネイティブホストプロセスと同じワイヤ契約（コマンド名 + JSON 引数）を保つ。

use crate::bridge::BridgeEndpoint;
use crate::error::BridgeError;
use salut_host::{CommandRegistry, DebugLogger, HostOptions};
use serde_json::Value;

/// インプロセスで動くホストコマンドテーブル
pub struct HostEndpoint {
    registry: CommandRegistry,
}

impl HostEndpoint {
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::new(),
        }
    }

    /// オプションに従いデバッグロガー付きで作成
    ///
    /// ログパスが開けない場合はログなしで続行する（起動は妨げない）
    pub fn with_options(options: &HostOptions) -> Self {
        let registry = match options.resolve_log_path() {
            Some(path) => match DebugLogger::new(path) {
                Ok(logger) => CommandRegistry::new().with_logger(logger),
                Err(err) => {
                    log::warn!("debug logger setup failed: {err}");
                    CommandRegistry::new()
                }
            },
            None => CommandRegistry::new(),
        };
        Self { registry }
    }
}

impl Default for HostEndpoint {
    fn default() -> Self {
        Self::new()
    }
}

impl BridgeEndpoint for HostEndpoint {
    fn invoke(&self, command: &str, args: &Value) -> std::result::Result<String, BridgeError> {
        self.registry
            .dispatch(command, args)
            .map_err(|err| BridgeError::Host {
                command: command.to_string(),
                message: err.to_string(),
            })
    }
}
