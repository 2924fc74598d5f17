use crate::app::{App, AppMode};
use crate::ui::render::{
    render_attempts, render_best_score, render_input, render_message, render_prompt,
    render_reference, render_title,
};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // title
                    Constraint::Length(4), // prompt
                    Constraint::Min(3),    // attempts
                    Constraint::Length(1), // best score
                    Constraint::Length(3), // response
                    Constraint::Length(3), // input
                    Constraint::Length(1), // message
                ])
                .split(frame.area());

            frame.render_widget(render_title(&state.title), chunks[0]);
            frame.render_widget(
                render_prompt(state.prompt.as_deref(), state.word_hint.as_deref()),
                chunks[1],
            );
            frame.render_widget(
                render_attempts(&state.attempts, state.attempts_left),
                chunks[2],
            );
            frame.render_widget(render_best_score(state.best_score), chunks[3]);
            frame.render_widget(render_reference(state.reference.as_deref()), chunks[4]);
            frame.render_widget(render_input(&state.input), chunks[5]);
            frame.render_widget(render_message(state.message.as_deref()), chunks[6]);

            // Inside the border, after the "> " marker.
            let input_area = chunks[5];
            let max_x = input_area.right().saturating_sub(2);
            let x = (input_area.x + 3).saturating_add(state.cursor).min(max_x);
            frame.set_cursor_position((x, input_area.y + 1));
        })?;

        Ok(())
    }
}
