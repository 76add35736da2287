//! ルートビューの描画
//!
//! セマンティックトークンだけを参照して各領域を描画する。
//! 生のカラーリテラルを使うのはエラー表示のみ（トークンテーブル外の
//! シェル固有アフォーダンス）。

use crate::app::{App, GreetStatus};
use crate::error::Result;
use crate::ui::layout::{AppLayout, LayoutManager};
use crate::ui::theme::{
    BackgroundToken, BorderToken, ColorToken, TextToken, Theme,
};
use crate::ui::typography::FontWeight;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const TITLE: &str = "Welcome to salut";
const SUBTITLE: &str = "Now with semantic color system & typography";
const PLACEHOLDER: &str = "Enter a name...";
const BUTTON_LABEL: &str = "  Greet  ";
const BUTTON_WIDTH: u16 = 11;

/// ルートビューのレンダラー
pub struct Renderer {
    theme: Theme,
    layout: LayoutManager,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            layout: LayoutManager::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// 一フレーム分の描画
    pub fn render(&self, frame: &mut Frame<'_>, app: &App) -> Result<()> {
        let layout = self.layout.compute(frame.area())?;

        self.render_surface(frame, &layout);
        self.render_header(frame, layout.header);
        self.render_form(frame, layout.form, app);
        self.render_message(frame, layout.message, app);
        self.render_status_line(frame, layout.status);

        Ok(())
    }

    fn render_surface(&self, frame: &mut Frame<'_>, layout: &AppLayout) {
        let surface = Block::default().style(
            Style::default()
                .bg(self.theme.color(ColorToken::Background(BackgroundToken::Default))),
        );
        frame.render_widget(surface, layout.total);
    }

    fn render_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = Line::from(Span::styled(
            TITLE,
            self.theme
                .fg_style(ColorToken::Text(TextToken::Primary))
                .add_modifier(FontWeight::Semibold.modifier()),
        ));
        let subtitle = Line::from(Span::styled(
            SUBTITLE,
            self.theme.fg_style(ColorToken::Text(TextToken::Secondary)),
        ));
        frame.render_widget(Paragraph::new(vec![title, subtitle]), inset(area, 2));
    }

    fn render_form(&self, frame: &mut Frame<'_>, area: Rect, app: &App) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(inset(area, 2));

        self.render_input(frame, columns[0], app);
        self.render_button(frame, columns[1], app);
    }

    fn render_input(&self, frame: &mut Frame<'_>, area: Rect, app: &App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.fg_style(ColorToken::Border(BorderToken::Primary)));
        let inner = block.inner(area);

        let content = if app.name().is_empty() {
            Span::styled(
                PLACEHOLDER,
                self.theme.fg_style(ColorToken::Text(TextToken::Tertiary)),
            )
        } else {
            Span::styled(
                app.name(),
                self.theme.fg_style(ColorToken::Text(TextToken::Primary)),
            )
        };

        frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
        frame.set_cursor_position(Position::new(
            inner.x + app.cursor_display_width(),
            inner.y,
        ));
    }

    fn render_button(&self, frame: &mut Frame<'_>, area: Rect, app: &App) {
        // 呼び出し中はボタンを disabled 状態の式で描く
        let (bg, fg) = if *app.status() == GreetStatus::Pending {
            (
                ColorToken::Background(BackgroundToken::ButtonDisabled),
                ColorToken::Text(TextToken::Disabled),
            )
        } else {
            (
                ColorToken::Background(BackgroundToken::Button),
                ColorToken::Text(TextToken::Button),
            )
        };

        let button = Paragraph::new(Line::from(Span::styled(
            BUTTON_LABEL,
            self.theme.style(fg, bg),
        )));
        let row = Rect {
            y: area.y + 1,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(button, row);
    }

    fn render_message(&self, frame: &mut Frame<'_>, area: Rect, app: &App) {
        let line = match app.status() {
            GreetStatus::Idle => Line::default(),
            GreetStatus::Pending => Line::from(Span::styled(
                "Calling host...",
                self.theme.fg_style(ColorToken::Text(TextToken::Tertiary)),
            )),
            GreetStatus::Ready(greeting) => Line::from(Span::styled(
                greeting.as_str(),
                self.theme
                    .fg_style(ColorToken::Text(TextToken::Brand))
                    .add_modifier(FontWeight::Medium.modifier()),
            )),
            GreetStatus::Failed(message) => Line::from(Span::styled(
                format!("Request failed: {message}"),
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            )),
        };
        frame.render_widget(Paragraph::new(line), inset(area, 2));
    }

    fn render_status_line(&self, frame: &mut Frame<'_>, area: Rect) {
        let hints = Paragraph::new(Line::from(Span::styled(
            " Enter: greet   C-u: clear   Esc: quit",
            self.theme.style(
                ColorToken::Text(TextToken::Secondary),
                ColorToken::Background(BackgroundToken::Base),
            ),
        )));
        frame.render_widget(hints, area);
    }
}

/// 左右に余白を取る
fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect {
        x: area.x + margin,
        width: area.width - margin * 2,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::testing::RecordingEndpoint;
    use crate::ui::theme::ThemeMode;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_buffer(app: &App) -> ratatui::buffer::Buffer {
        let renderer = Renderer::new(Theme::new(ThemeMode::Light));
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                renderer.render(frame, app).expect("描画に失敗しました");
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn idle_view_shows_title_and_placeholder() {
        let (endpoint, _) = RecordingEndpoint::replying("Hello, !");
        let app = App::with_endpoint(Box::new(endpoint));

        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains(TITLE));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Greet"));
    }

    #[test]
    fn typed_name_replaces_placeholder() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        let (endpoint, _) = RecordingEndpoint::replying("Hello, Ada!");
        let mut app = App::with_endpoint(Box::new(endpoint));
        for c in "Ada".chars() {
            app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = buffer_text(&render_to_buffer(&app));
        assert!(text.contains("Ada"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn message_line_follows_greet_status() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
        let (endpoint, _) = RecordingEndpoint::replying("Hello, Ada!");
        let mut app = App::with_endpoint(Box::new(endpoint));
        app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        for _ in 0..200 {
            app.poll_bridge();
            if *app.status() != GreetStatus::Pending {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        let text = buffer_text(&render_to_buffer(&app));
        // 解決済みなら挨拶、未解決なら進行中表示
        assert!(text.contains("Hello, Ada!") || text.contains("Calling host"));
    }
}
