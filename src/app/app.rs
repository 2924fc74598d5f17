use chrono::NaiveDate;
use crossterm::event::KeyCode;
use tracing::info;

use super::event::AppEvent;
use super::input::InputLine;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{ScoreBand, Scorer};
use crate::game::dates::{format_date, parse_date};
use crate::game::{fetch_prompt, DailyRound, GameConfig, PromptStore};
use crate::input::clipboard;
use crate::text::count_words;
use crate::ui::command::{command_to_app_event, parse_command};

pub const HELP_TEXT: &str =
    "Type a guess and press Enter. :date YYYY-MM-DD opens a past prompt, :today returns, :dates lists prompts, @@ pastes, :q quits.";

pub struct App {
    mode: AppMode,
    store: Box<dyn PromptStore>,
    scorer: Scorer,
    config: GameConfig,
    today: NaiveDate,
    selected_date: NaiveDate,
    round: Option<DailyRound>,
    message: Option<String>,
    input: InputLine,
}

impl App {
    /// Creates the app and opens today's prompt.
    pub fn new(store: Box<dyn PromptStore>, config: GameConfig, today: NaiveDate) -> Self {
        let mut app = Self {
            mode: AppMode::NoPrompt,
            store,
            scorer: Scorer::new(config.scoring),
            config,
            today,
            selected_date: today,
            round: None,
            message: None,
            input: InputLine::new(),
        };
        app.open_date(today);
        app
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn round(&self) -> Option<&DailyRound> {
        self.round.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.message = Some(HELP_TEXT.to_string()),
            AppEvent::Today => self.open_date(self.today),
            AppEvent::SelectDate(input) => match parse_date(&input) {
                Ok(date) => self.open_date(date),
                Err(e) => self.message = Some(e.user_message()),
            },
            AppEvent::ListDates => self.list_dates(),
            AppEvent::Guess(guess) => self.submit_guess(&guess),
            AppEvent::PasteClipboard => match clipboard::read_guess() {
                Ok(guess) => self.submit_guess(&guess),
                Err(e) => self.message = Some(e.to_string()),
            },
            AppEvent::InvalidCommand(input) => {
                if !input.is_empty() {
                    self.message = Some(format!("Unknown command: {}", input));
                }
            }
            AppEvent::None => {}
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Esc => self.input.clear(),
            KeyCode::Enter => {
                let line = self.input.take();
                let event = command_to_app_event(parse_command(&line));
                self.handle_event(event);
            }
            _ => {}
        }
    }

    fn open_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        match fetch_prompt(self.store.as_ref(), date, self.today) {
            Ok(prompt) => {
                info!(%date, "opened prompt");
                self.round = Some(DailyRound::new(prompt, &self.config));
                self.mode = AppMode::Playing;
                self.message = None;
            }
            Err(e) => {
                self.round = None;
                self.mode = AppMode::NoPrompt;
                self.message = Some(e.user_message());
            }
        }
    }

    fn list_dates(&mut self) {
        self.message = Some(match self.store.available_dates(self.today) {
            Ok(dates) if dates.is_empty() => "No prompts available yet".to_string(),
            Ok(dates) => {
                let dates: Vec<String> = dates.into_iter().map(format_date).collect();
                format!("Available: {}", dates.join(", "))
            }
            Err(e) => e.user_message(),
        });
    }

    fn submit_guess(&mut self, guess: &str) {
        let Some(round) = self.round.as_mut() else {
            self.message = Some("No prompt loaded".to_string());
            return;
        };

        match round.submit(&self.scorer, guess) {
            Ok(attempt) => {
                let band = ScoreBand::from_score(attempt.score);
                self.message = Some(format!("{}% - {}", attempt.score, band.message()));
                if round.is_revealed() {
                    self.mode = AppMode::Revealed;
                }
            }
            Err(e) => self.message = Some(e.user_message()),
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let title = if self.selected_date == self.today {
            "Today's prompt".to_string()
        } else {
            format!("Prompt for {}", format_date(self.selected_date))
        };

        let round = self.round.as_ref();
        let word_hint = round.map(|r| {
            let words = count_words(&r.prompt().reference_text);
            let plural = if words == 1 { "" } else { "s" };
            format!("The response is {} word{}.", words, plural)
        });

        RenderState {
            mode: self.mode,
            title,
            prompt: round.map(|r| r.prompt().prompt.clone()),
            word_hint,
            attempts: round.map(|r| r.attempts().to_vec()).unwrap_or_default(),
            attempts_left: round.map_or(0, DailyRound::attempts_left),
            best_score: round.filter(|r| !r.attempts().is_empty()).map(DailyRound::best_score),
            reference: round.and_then(|r| r.reference()).map(str::to_string),
            message: self.message.clone(),
            input: self.input.as_str().to_string(),
            cursor: u16::try_from(self.input.width()).unwrap_or(u16::MAX),
        }
    }
}
