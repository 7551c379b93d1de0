//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod feed;
mod help;
pub mod screen;
mod styles;

pub use feed::DecoyFeed;
pub use help::{help_height, help_lines, HELP_LINES};
pub use screen::{Pane, ScreenPlan};
pub use styles::{ColorConfig, ReaderStyles};

use crate::model::AppError;
use crate::persistence::Progress;
use crate::state::{Outcome, Reader, ReaderEvent};
use constants::{JUMP_PROMPT_PREFIX, READING_PREFIX, SEARCH_PROMPT_PREFIX, SUSPENDED_IDLE_LINE};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::sync::Once;
use tracing::debug;

/// Knobs for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Probability that the decoy feed scrolls when the reading position moves.
    pub feed_advance_chance: f64,
    /// Whether to paint colors.
    pub colors: ColorConfig,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            feed_advance_chance: 0.4,
            colors: ColorConfig::enabled(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    reader: Reader,
    feed: DecoyFeed,
    styles: ReaderStyles,
    feed_advance_chance: f64,
    rng: StdRng,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(reader: Reader, feed: DecoyFeed, options: SessionOptions) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            reader,
            feed,
            options,
            StdRng::from_entropy(),
        ))
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal input and returns the progress to persist once the
    /// user quits.
    pub fn run(&mut self) -> Result<Progress, AppError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            match self.handle_event(event) {
                Outcome::Quit => return Ok(self.reader.progress()),
                Outcome::Ignored => continue,
                Outcome::Updated | Outcome::Moved => self.draw()?,
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app over an already initialized terminal.
    ///
    /// If the reader was laid out for a different width than the terminal
    /// reports, it is reflowed first.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut reader: Reader,
        feed: DecoyFeed,
        options: SessionOptions,
        rng: StdRng,
    ) -> Self {
        if let Ok(size) = terminal.size() {
            if size.width != reader.width() {
                reader.handle(ReaderEvent::Resize { width: size.width });
            }
        }

        Self {
            terminal,
            reader,
            feed,
            styles: ReaderStyles::new(options.colors),
            feed_advance_chance: options.feed_advance_chance,
            rng,
        }
    }

    /// Reader state.
    pub fn reader(&self) -> &Reader {
        &self.reader
    }

    /// Decoy feed state.
    pub fn feed(&self) -> &DecoyFeed {
        &self.feed
    }

    /// Underlying terminal (tests inspect the backend buffer through it).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Route one terminal event to the reader.
    ///
    /// Only key presses count; release and repeat reports are dropped.
    pub fn handle_event(&mut self, event: Event) -> Outcome {
        let event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => ReaderEvent::Key(key),
            Event::Mouse(mouse) => ReaderEvent::Mouse(mouse.kind),
            Event::Resize(width, height) => {
                debug!("Handling resize to {}x{}", width, height);
                ReaderEvent::Resize { width }
            }
            _ => return Outcome::Ignored,
        };

        let outcome = self.reader.handle(event);
        if outcome == Outcome::Moved {
            self.feed
                .maybe_advance(&mut self.rng, self.feed_advance_chance);
        }
        outcome
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), AppError> {
        let size = self.terminal.size()?;
        let plan = ScreenPlan::build(&self.reader, size.height);
        let feed = &self.feed;
        let styles = self.styles;
        self.terminal
            .draw(|frame| draw_plan(frame, &plan, feed, styles))?;
        Ok(())
    }
}

/// Paint `plan` into `frame`.
pub fn draw_plan(frame: &mut Frame, plan: &ScreenPlan<'_>, feed: &DecoyFeed, styles: ReaderStyles) {
    let area = frame.area();

    for row in 0..plan.feed_rows {
        let text = feed.line_at(usize::from(row));
        draw_row(frame, area, row, Line::styled(text, styles.feed_line(text)));
    }

    if let Some(row) = plan.status_row {
        draw_row(
            frame,
            area,
            row,
            Line::styled(plan.status.as_str(), styles.status()),
        );
    }

    match plan.pane {
        Pane::Suspended => {
            if let Some(row) = plan.last_row() {
                draw_row(frame, area, row, Line::styled(SUSPENDED_IDLE_LINE, styles.idle()));
            }
        }
        Pane::Help => {
            for (offset, line) in (0u16..).zip(help_lines(&styles)) {
                draw_row(frame, area, plan.pane_top().saturating_add(offset), line);
            }
        }
        Pane::SearchPrompt(buffer) => {
            if let Some(row) = plan.last_row() {
                let text = format!("{SEARCH_PROMPT_PREFIX}{buffer}");
                draw_row(frame, area, row, Line::styled(text, styles.search_prompt()));
            }
        }
        Pane::JumpPrompt(buffer) => {
            if let Some(row) = plan.last_row() {
                let text = format!("{JUMP_PROMPT_PREFIX}{buffer}");
                draw_row(frame, area, row, Line::styled(text, styles.jump_prompt()));
            }
        }
        Pane::Reading(fragments) => {
            for (offset, fragment) in (0u16..).zip(fragments) {
                let text = format!("{READING_PREFIX}{fragment}");
                draw_row(
                    frame,
                    area,
                    plan.pane_top().saturating_add(offset),
                    Line::styled(text, styles.reading()),
                );
            }
        }
    }
}

/// Draw a single line at `row`, clipped to the frame width. Rows outside
/// the frame are skipped.
fn draw_row(frame: &mut Frame, area: Rect, row: u16, line: Line<'_>) {
    if row >= area.height {
        return;
    }
    let target = Rect::new(area.x, area.y + row, area.width, 1);
    frame.render_widget(Paragraph::new(line), target);
}

/// Run one interactive session and hand back the progress to persist.
///
/// The terminal is restored whether the session ends normally or not.
pub fn run_session(
    reader: Reader,
    feed: DecoyFeed,
    options: SessionOptions,
) -> Result<Progress, AppError> {
    install_panic_hook();
    let result = TuiApp::new(reader, feed, options).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Put the terminal back before a panic message is printed, and record
/// the panic in the log.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            tracing::error!(?info, "panic");
            default_panic(info);
        }));
    });
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
