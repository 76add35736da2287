//! ブリッジ層
//!
//! ビュー層からホストコマンドへの単一呼び出し
//! `invoke(コマンド名, 引数マップ) -> テキスト` を提供する。
//! 呼び出しはワーカースレッドに委譲され、UI イベントループは
//! チャネルをポーリングするだけで応答性を保つ。

pub mod host;

use crate::error::BridgeError;
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

pub use host::HostEndpoint;

/// ブリッジの呼び出し先
///
/// ホストプロセス側のコマンドテーブルを抽象化する。テストではモックに差し替える。
pub trait BridgeEndpoint: Send {
    fn invoke(&self, command: &str, args: &Value) -> std::result::Result<String, BridgeError>;
}

/// ワーカーへ渡す呼び出し要求
struct InvokeRequest {
    command: String,
    args: Value,
    reply: Sender<std::result::Result<String, BridgeError>>,
}

/// 進行中のブリッジ呼び出し
///
/// キャンセルは配線しない。ハンドルを破棄すれば結果は単に捨てられる。
pub struct PendingInvoke {
    rx: Receiver<std::result::Result<String, BridgeError>>,
}

impl PendingInvoke {
    /// 完了していれば結果を取り出す（ノンブロッキング）
    pub fn try_take(&mut self) -> Option<std::result::Result<String, BridgeError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(BridgeError::WorkerGone)),
        }
    }

    /// 完了までブロックして結果を取り出す（テスト・終了処理向け）
    pub fn wait(self) -> std::result::Result<String, BridgeError> {
        self.rx.recv().unwrap_or(Err(BridgeError::WorkerGone))
    }
}

/// ブリッジクライアント
///
/// エンドポイントを所有するワーカースレッドを一本立て、
/// 呼び出しごとに応答チャネルを払い出す。
pub struct BridgeClient {
    tx: Sender<InvokeRequest>,
}

impl BridgeClient {
    /// エンドポイントを持つワーカーを起動してクライアントを作成
    pub fn spawn(endpoint: Box<dyn BridgeEndpoint>) -> Self {
        let (tx, rx) = mpsc::channel::<InvokeRequest>();
        thread::spawn(move || worker_loop(endpoint, rx));
        Self { tx }
    }

    /// 一回のブリッジ呼び出しを発行
    ///
    /// リトライもデバウンスも行わない。送信した時点でワイヤ契約は確定する。
    pub fn invoke(&self, command: &str, args: Value) -> PendingInvoke {
        let (reply_tx, reply_rx) = mpsc::channel();
        let request = InvokeRequest {
            command: command.to_string(),
            args,
            reply: reply_tx,
        };
        if self.tx.send(request).is_err() {
            log::warn!("bridge worker is gone; invoke of {command} dropped");
        }
        PendingInvoke { rx: reply_rx }
    }
}

fn worker_loop(endpoint: Box<dyn BridgeEndpoint>, rx: Receiver<InvokeRequest>) {
    while let Ok(request) = rx.recv() {
        log::debug!("invoke {} {}", request.command, request.args);
        let result = endpoint.invoke(&request.command, &request.args);
        // 応答先が既に破棄されていても構わない
        let _ = request.reply.send(result);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// 呼び出しを記録するテスト用エンドポイント
    pub struct RecordingEndpoint {
        pub calls: Arc<Mutex<Vec<(String, Value)>>>,
        pub reply: std::result::Result<String, BridgeError>,
    }

    impl RecordingEndpoint {
        pub fn replying(reply: &str) -> (Self, Arc<Mutex<Vec<(String, Value)>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let endpoint = Self {
                calls: Arc::clone(&calls),
                reply: Ok(reply.to_string()),
            };
            (endpoint, calls)
        }

        pub fn failing(error: BridgeError) -> (Self, Arc<Mutex<Vec<(String, Value)>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let endpoint = Self {
                calls: Arc::clone(&calls),
                reply: Err(error),
            };
            (endpoint, calls)
        }
    }

    impl BridgeEndpoint for RecordingEndpoint {
        fn invoke(
            &self,
            command: &str,
            args: &Value,
        ) -> std::result::Result<String, BridgeError> {
            self.calls
                .lock()
                .expect("call recorder poisoned")
                .push((command.to_string(), args.clone()));
            self.reply.clone()
        }
    }
}
