use std::io::{IsTerminal, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::time::Instant;

use crate::load::{ProgressTracker, RunState};

const DESCRIPTION: &str = "[Performing Stress Test]";
const BAR_WIDTH: usize = 30;

/// Draws the tracker's percentage on stderr until the load phase is done.
pub(super) fn spawn_progress_renderer(
    tracker: ProgressTracker,
    total: Duration,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    let style = ProgressStyle::new(BAR_WIDTH);
    let run_start = Instant::now();

    tokio::spawn(async move {
        if !std::io::stderr().is_terminal() {
            return;
        }

        let mut ticker = tokio::time::interval(Duration::from_millis(250));

        loop {
            ticker.tick().await;
            let done = tracker.state() == RunState::Done;
            let elapsed = if done { total } else { run_start.elapsed() };
            let line = build_progress_line(&style, tracker.get(), elapsed, total, no_color);
            if render_progress_line(&line, no_color).is_err() {
                break;
            }
            if done {
                drop(finish_progress_line());
                break;
            }
        }
    })
}

fn render_progress_line(line: &[ProgressSegment], no_color: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        match segment.color {
            Some(color) if !no_color => queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?,
            Some(_) | None => queue!(out, Print(&segment.text))?,
        }
    }
    out.flush()?;
    Ok(())
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(
    style: &ProgressStyle,
    percent: u8,
    elapsed: Duration,
    total: Duration,
    no_color: bool,
) -> Vec<ProgressSegment> {
    let size = style.size.max(1);
    let percent = usize::from(percent.min(100));
    let complete_size = percent
        .saturating_mul(size)
        .checked_div(100)
        .unwrap_or(0)
        .min(size);
    let incomplete_size = size.saturating_sub(complete_size);

    let elapsed_tenths = elapsed.min(total).as_millis().checked_div(100).unwrap_or(0);
    let secs = elapsed_tenths.checked_div(10).unwrap_or(0);
    let tenths = elapsed_tenths.checked_rem(10).unwrap_or(0);

    let progress_bar = format!(
        "{} {}{}{}{}",
        DESCRIPTION,
        style.begin,
        style.fill.repeat(complete_size),
        style.empty.repeat(incomplete_size),
        style.end
    );
    let percent_text = format!(" {:>3}%", percent);
    let time_text = format!(" | {}.{}s / {}s", secs, tenths, total.as_secs());

    if no_color {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::plain(percent_text),
            ProgressSegment::plain(time_text),
        ]
    } else {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::colored(percent_text, Color::Cyan),
            ProgressSegment::colored(time_text, Color::Yellow),
        ]
    }
}

struct ProgressStyle {
    size: usize,
    begin: String,
    end: String,
    fill: String,
    empty: String,
}

impl ProgressStyle {
    fn new(size: usize) -> Self {
        Self {
            size,
            begin: "[".to_owned(),
            end: "]".to_owned(),
            fill: "#".to_owned(),
            empty: "-".to_owned(),
        }
    }
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
