//! The interactive screen: calculator form, result cards and the challenge
//! view, driven by line input.
//!
//! The screen owns the single [`ChallengeTimer`]. User input and timer ticks
//! are multiplexed on one task with `select!`, so nothing here needs a lock.

use std::io::{self, Write};

use kcalburn_core::{
    estimate_all, summary_line, ActivityCard, ActivityEstimate, CalculationInput, Catalog,
    ChallengeTimer, ChallengeView, Config, CoreError, Event,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

const CHALLENGE_HELP: &str = "Commands: [s] start  [p] pause/resume  [x] stop  [q] close";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start,
    TogglePause,
    Stop,
    Close,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "start" => Command::Start,
        "p" | "pause" | "resume" => Command::TogglePause,
        "x" | "stop" => Command::Stop,
        "q" | "close" | "quit" => Command::Close,
        _ => Command::Unknown,
    }
}

/// Read one line, replacing bytes that are not UTF-8 so they reach the
/// validators as ordinary bad input. `None` at end of input.
///
/// Partial bytes stay in `buf` if the read is cancelled, so calling again
/// continues the same line.
async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    reader.read_until(b'\n', buf).await?;
    if buf.is_empty() {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf)
        .trim_end_matches(['\n', '\r'])
        .to_string();
    buf.clear();
    Ok(Some(line))
}

/// Resolve a 1-based card number.
fn pick<'a>(choice: &str, estimates: &'a [ActivityEstimate]) -> Option<&'a ActivityEstimate> {
    let n: usize = choice.trim().parse().ok()?;
    estimates.get(n.checked_sub(1)?)
}

pub struct Screen<R, W> {
    reader: R,
    line_buf: Vec<u8>,
    out: W,
    timer: ChallengeTimer,
    catalog: Catalog,
    default_weight: f64,
    show_intensity: bool,
    /// Print challenge events as JSON lines instead of text.
    json_events: bool,
}

impl<R, W> Screen<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W, config: &Config) -> Result<Self, CoreError> {
        Ok(Self {
            reader,
            line_buf: Vec::new(),
            out,
            timer: ChallengeTimer::new(),
            catalog: config.catalog()?,
            default_weight: config.default_weight_kg(),
            show_intensity: config.display.show_intensity,
            json_events: false,
        })
    }

    pub fn with_json_events(mut self, on: bool) -> Self {
        self.json_events = on;
        self
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text} ")?;
        self.out.flush()?;
        read_line(&mut self.reader, &mut self.line_buf).await
    }

    /// Calculator loop. Returns when input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(calories) = self.prompt("Calories (kcal):").await? else {
                return Ok(());
            };
            let weight_prompt = format!("Body weight in kg (blank for {}):", self.default_weight);
            let Some(weight) = self.prompt(&weight_prompt).await? else {
                return Ok(());
            };

            let parsed =
                CalculationInput::parse(&calories, Some(weight.as_str()), self.default_weight);
            let input = match parsed {
                Ok(input) => input,
                Err(e) => {
                    tracing::debug!(error = %e, "rejected calculator input");
                    writeln!(self.out, "{e}")?;
                    continue;
                }
            };

            let estimates = estimate_all(&input, &self.catalog);
            let cards: Vec<ActivityCard> = estimates.iter().map(ActivityCard::from).collect();
            render::cards(&mut self.out, &summary_line(&input), &cards, self.show_intensity)?;

            let pick_prompt = format!(
                "Pick an activity (1-{}), blank to recalculate:",
                estimates.len()
            );
            let Some(choice) = self.prompt(&pick_prompt).await? else {
                return Ok(());
            };
            if choice.trim().is_empty() {
                continue;
            }
            match pick(&choice, &estimates) {
                Some(est) => {
                    let est = est.clone();
                    self.run_challenge(&est).await?;
                }
                None => writeln!(self.out, "No activity numbered {}.", choice.trim())?,
            }
        }
    }

    /// Open a challenge for `estimate` and run it until stopped, closed, or
    /// input ends.
    pub async fn run_challenge(&mut self, estimate: &ActivityEstimate) -> io::Result<()> {
        let opened = self
            .timer
            .open(estimate.activity.clone(), estimate.target_seconds);
        self.emit(&opened)?;
        self.out.flush()?;

        loop {
            let event = tokio::select! {
                line = read_line(&mut self.reader, &mut self.line_buf) => {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            self.timer.close();
                            return Err(e);
                        }
                    };
                    match line {
                        Some(line) => self.handle_command(&line)?,
                        None => self.timer.close(),
                    }
                }
                event = self.timer.next_tick() => event,
            };
            if let Some(event) = event {
                self.emit(&event)?;
            }
            self.out.flush()?;
            if self.timer.activity().is_none() {
                return Ok(());
            }
        }
    }

    /// Apply one line of input and return the resulting event, if any.
    fn handle_command(&mut self, line: &str) -> io::Result<Option<Event>> {
        let event = match parse_command(line) {
            Command::Start => self.timer.start(),
            Command::TogglePause => self.timer.toggle_pause(),
            Command::Stop => self.timer.stop(),
            Command::Close => self.timer.close(),
            Command::Unknown => {
                tracing::debug!(line, "unknown challenge command");
                if !self.json_events {
                    writeln!(self.out, "{CHALLENGE_HELP}")?;
                }
                None
            }
        };
        Ok(event)
    }

    fn emit(&mut self, event: &Event) -> io::Result<()> {
        if self.json_events {
            serde_json::to_writer(&mut self.out, event)?;
            return writeln!(self.out);
        }
        match event {
            Event::ChallengeOpened { .. } => match ChallengeView::of(&self.timer) {
                Some(view) => render::challenge_header(&mut self.out, &view),
                None => Ok(()),
            },
            Event::ChallengePaused { .. } => {
                writeln!(self.out, "Paused.")?;
                self.render_status()
            }
            Event::ChallengeStarted { .. }
            | Event::ChallengeResumed { .. }
            | Event::ChallengeTicked { .. } => self.render_status(),
            Event::ChallengeCompleted { message, .. } => {
                self.render_status()?;
                writeln!(self.out, "{message}")
            }
            Event::ChallengeClosed { .. } => writeln!(self.out, "Challenge closed."),
        }
    }

    fn render_status(&mut self) -> io::Result<()> {
        match ChallengeView::of(&self.timer) {
            Some(view) => render::challenge_status(&mut self.out, &view),
            None => Ok(()),
        }
    }
}
