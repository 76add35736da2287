//! 組み込みコマンド
//!
//! スターターに同梱されるサンプルコマンドの実装。
//! 引数形状はワイヤ契約そのもの（`greet` は `{"name": <string>}`）。

use crate::error::{HostError, HostResult};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct GreetArgs {
    name: String,
}

/// `greet` コマンド
///
/// `{"name": "Ada"}` を受け取り `"Hello, Ada!"` を返す。
/// 空文字列の name も有効な入力として扱う（入力検証は行わない）。
pub fn greet(args: &Value) -> HostResult<String> {
    let args: GreetArgs =
        serde_json::from_value(args.clone()).map_err(|err| HostError::InvalidArgs {
            command: "greet".to_string(),
            message: err.to_string(),
        })?;
    Ok(format!("Hello, {}!", args.name))
}
