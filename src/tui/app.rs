use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::ConfigError;
use crate::model::{AppConfig, Labels, TaskId};
use crate::ops::{Command, Outcome, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Error type for running the terminal app
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: io::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Which widget receives typed keys when the edit dialog is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// Terminal front end around the task list controller
pub struct App {
    pub tasks: TaskList,
    pub theme: Theme,
    pub labels: Labels,
    pub show_key_hints: bool,
    pub focus: Focus,
    /// Index of the highlighted row in the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Byte offset of the text cursor within the draft
    pub draft_cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            tasks: TaskList::with_targeting(config.edit.targeting),
            theme: Theme::from_config(&config.ui),
            labels: config.labels.clone(),
            show_key_hints: config.ui.show_key_hints,
            focus: Focus::Input,
            cursor: 0,
            scroll_offset: 0,
            draft_cursor: 0,
            should_quit: false,
        }
    }

    /// Send a command to the controller and keep cursors in range
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = self.tasks.dispatch(command);
        match &outcome {
            Outcome::Added(_) => {
                self.draft_cursor = 0;
                self.cursor = self.tasks.tasks().len() - 1;
            }
            Outcome::EditStarted(_) => self.draft_cursor = self.tasks.draft().len(),
            Outcome::Edited(_) | Outcome::EditDiscarded | Outcome::ModalClosed => {
                self.draft_cursor = 0;
            }
            Outcome::Deleted(_) => self.clamp_cursor(),
            Outcome::DraftChanged | Outcome::Ignored | Outcome::Toggled { .. } => {}
        }
        self.draft_cursor = self.draft_cursor.min(self.tasks.draft().len());
        outcome
    }

    /// Id of the highlighted task, if any
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.cursor).map(|t| t.id.clone())
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.tasks.tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        if len == 0 {
            self.focus = Focus::Input;
        }
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.tasks.tasks().len(), "tui exiting");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
