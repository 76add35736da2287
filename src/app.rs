//! ルートビューの状態管理
//!
//! ビューが持つローカル状態は二つだけ：入力中の名前と、表示する挨拶。
//! 送信で一回のブリッジ呼び出しを発行し、解決したら表示を置き換える。
//! 入力検証・リトライ・キャッシュは行わない。

use crate::bridge::{BridgeClient, BridgeEndpoint, HostEndpoint, PendingInvoke};
use crate::error::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use salut_host::HostOptions;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// `greet` コマンド名（ホストのコマンドテーブルとのワイヤ契約）
pub const GREET_COMMAND: &str = "greet";

/// 挨拶表示の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetStatus {
    /// まだ何も送信していない
    Idle,
    /// ブリッジ呼び出しが進行中
    Pending,
    /// 挨拶テキストを受信済み
    Ready(String),
    /// 呼び出しが失敗した（可視のエラー状態）
    Failed(String),
}

/// アプリシェルのルートビュー
pub struct App {
    bridge: BridgeClient,
    name: String,
    /// 名前入力内のカーソル（文字単位）
    cursor: usize,
    status: GreetStatus,
    pending: Option<PendingInvoke>,
    running: bool,
}

impl App {
    /// インプロセスホストを呼び出し先にして作成
    pub fn new() -> Result<Self> {
        Ok(Self::with_endpoint(Box::new(HostEndpoint::new())))
    }

    /// ホストオプション付きで作成
    pub fn with_options(options: &HostOptions) -> Result<Self> {
        Ok(Self::with_endpoint(Box::new(HostEndpoint::with_options(
            options,
        ))))
    }

    /// 任意のエンドポイントを呼び出し先にして作成（テストでも使う）
    pub fn with_endpoint(endpoint: Box<dyn BridgeEndpoint>) -> Self {
        Self {
            bridge: BridgeClient::spawn(endpoint),
            name: String::new(),
            cursor: 0,
            status: GreetStatus::Idle,
            pending: None,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> &GreetStatus {
        &self.status
    }

    /// 入力カーソル位置の表示幅（入力欄のカーソル描画用）
    pub fn cursor_display_width(&self) -> u16 {
        let prefix: String = self.name.chars().take(self.cursor).collect();
        prefix.width() as u16
    }

    /// キー入力を処理
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('u') => self.clear_input(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor < self.name.chars().count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.name.chars().count(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }

    /// フォーム送信：現在の名前で一回のブリッジ呼び出しを発行
    ///
    /// 空の名前でもそのまま送る。未解決の呼び出しがあっても
    /// 新しい呼び出しで置き換える（デバウンスしない）。
    pub fn submit(&mut self) {
        let pending = self
            .bridge
            .invoke(GREET_COMMAND, json!({ "name": self.name }));
        self.pending = Some(pending);
        self.status = GreetStatus::Pending;
    }

    /// 進行中の呼び出しを確認し、完了していれば表示状態を更新
    ///
    /// イベントループから毎ティック呼ばれる。未完了なら何もしない。
    pub fn poll_bridge(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let Some(result) = pending.try_take() else {
            return;
        };
        self.pending = None;
        self.status = match result {
            Ok(greeting) => GreetStatus::Ready(greeting),
            Err(err) => GreetStatus::Failed(err.to_string()),
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    fn insert_char(&mut self, c: char) {
        let byte_idx = char_to_byte_index(&self.name, self.cursor);
        self.name.insert(byte_idx, c);
        self.cursor += 1;
    }

    fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = char_to_byte_index(&self.name, self.cursor - 1);
        self.name.remove(byte_idx);
        self.cursor -= 1;
    }

    fn clear_input(&mut self) {
        self.name.clear();
        self.cursor = 0;
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::RecordingEndpoint;
    use crate::error::BridgeError;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// ブリッジ解決までポーリング
    fn wait_until_settled(app: &mut App) {
        for _ in 0..200 {
            app.poll_bridge();
            if *app.status() != GreetStatus::Pending {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("ブリッジ呼び出しが解決しませんでした");
    }

    #[test]
    fn submit_issues_exactly_one_call_with_name() {
        let (endpoint, calls) = RecordingEndpoint::replying("Hello, Ada!");
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "Ada");
        app.handle_key_event(key(KeyCode::Enter));
        wait_until_settled(&mut app);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "greet");
        assert_eq!(calls[0].1, json!({ "name": "Ada" }));
    }

    #[test]
    fn resolved_greeting_is_displayed_once() {
        let (endpoint, calls) = RecordingEndpoint::replying("Hello, Ada!");
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "Ada");
        app.handle_key_event(key(KeyCode::Enter));
        wait_until_settled(&mut app);

        assert_eq!(*app.status(), GreetStatus::Ready("Hello, Ada!".to_string()));

        // 再送信なしで何度ポーリング（=再描画）しても呼び出しは増えない
        for _ in 0..10 {
            app.poll_bridge();
        }
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn empty_name_still_issues_a_call() {
        let (endpoint, calls) = RecordingEndpoint::replying("Hello, !");
        let mut app = App::with_endpoint(Box::new(endpoint));

        app.handle_key_event(key(KeyCode::Enter));
        wait_until_settled(&mut app);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, json!({ "name": "" }));
    }

    #[test]
    fn failed_call_becomes_visible_error_state() {
        let (endpoint, _) = RecordingEndpoint::failing(BridgeError::Host {
            command: "greet".to_string(),
            message: "host exploded".to_string(),
        });
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "Ada");
        app.handle_key_event(key(KeyCode::Enter));
        wait_until_settled(&mut app);

        match app.status() {
            GreetStatus::Failed(message) => assert!(message.contains("host exploded")),
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn input_editing_keeps_cursor_consistent() {
        let (endpoint, _) = RecordingEndpoint::replying("Hello, !");
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "Ada");
        assert_eq!(app.name(), "Ada");

        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.name(), "Ad");

        app.handle_key_event(key(KeyCode::Home));
        app.handle_key_event(key(KeyCode::Char('L')));
        assert_eq!(app.name(), "LAd");

        app.handle_key_event(key(KeyCode::End));
        app.handle_key_event(key(KeyCode::Char('a')));
        assert_eq!(app.name(), "LAda");
    }

    #[test]
    fn wide_characters_report_display_width() {
        let (endpoint, _) = RecordingEndpoint::replying("Hello, !");
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "あだ");
        assert_eq!(app.cursor_display_width(), 4);
    }

    #[test]
    fn ctrl_u_clears_input() {
        let (endpoint, _) = RecordingEndpoint::replying("Hello, !");
        let mut app = App::with_endpoint(Box::new(endpoint));

        type_name(&mut app, "Ada");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.name(), "");
        assert_eq!(app.cursor_display_width(), 0);
    }

    #[test]
    fn esc_quits() {
        let (endpoint, _) = RecordingEndpoint::replying("Hello, !");
        let mut app = App::with_endpoint(Box::new(endpoint));

        assert!(app.is_running());
        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.is_running());
    }
}
