//! salut - Desktop app shell starter
//!
//! セマンティックカラーシステム付きのアプリシェルひな形。
//! ルートビュー一枚と、ホストコマンドへの単一のブリッジ呼び出しで構成される。

// コアモジュール
pub mod app;
pub mod bridge;
pub mod error;

// 表示層
pub mod frontend;
pub mod ui;

// 公開API
pub use app::{App, GreetStatus, GREET_COMMAND};
pub use bridge::{BridgeClient, BridgeEndpoint, HostEndpoint, PendingInvoke};
pub use error::{BridgeError, Result, SalutError};
pub use frontend::TuiApplication;
pub use ui::{ColorToken, Theme, ThemeMode};
