//! ターミナルフロントエンド
//!
//! raw mode + 代替スクリーンでイベントループを回す。
//! サスペンドポイントはブリッジ呼び出しのみで、ループは 16ms 間隔の
//! ポーリングで入力と呼び出し完了の両方を拾う。

use crate::app::App;
use crate::error::{Result, SalutError, UiError};
use crate::ui::{Renderer, Theme, ThemeMode};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;

pub struct TuiApplication {
    app: App,
    renderer: Renderer,
}

impl TuiApplication {
    pub fn new(app: App) -> Self {
        Self::with_theme(app, Theme::new(ThemeMode::default()))
    }

    pub fn with_theme(app: App, theme: Theme) -> Self {
        Self {
            app,
            renderer: Renderer::new(theme),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;

        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).map_err(|err| terminal_error("terminal init", err))?;

        let loop_result = self.event_loop(&mut terminal);
        drop(terminal);
        let cleanup_result = leave_terminal();

        loop_result.and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        while self.app.is_running() {
            self.app.poll_bridge();
            self.render(terminal)?;

            if event::poll(Duration::from_millis(16))
                .map_err(|err| terminal_error("event poll", err))?
            {
                match event::read().map_err(|err| terminal_error("event read", err))? {
                    Event::Key(key_event) => self.app.handle_key_event(key_event),
                    Event::Resize(_, _) => {}
                    Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
        }

        Ok(())
    }

    fn render<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut render_result = Ok(());
        terminal
            .draw(|frame| {
                render_result = self.renderer.render(frame, &self.app);
            })
            .map_err(|err| terminal_error("render", err))?;
        render_result
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(|_| SalutError::Ui(UiError::TerminalInit))?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)
        .map_err(|err| terminal_error("enter alternate screen", err))?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, LeaveAlternateScreen)
        .map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> SalutError {
    SalutError::Ui(UiError::RenderingFailed {
        component: format!("{}: {}", context, err),
    })
}
