//! Interactive tag input in the terminal.
//!
//! Type a tag and press Enter to add it. Click a chip's `×` to remove it.
//! Esc clears the draft, Ctrl+C quits.
//!
//! Run with: cargo run --example tag_input

use std::io::{self, stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use tagflow::renderer::REMOVE_BUTTON_WIDTH;
use tagflow::state::poll_event;
use tagflow::{CellMeasurer, ChipRenderer, InputEvent, InputOutcome, TagInput, TagStore};

const SEEDS: [&str; 5] = ["XCode", "IOS", "IOS App Development", "Swift", "SwiftUI"];

/// Rows above the chips: prompt, input line, blank.
const CHIPS_TOP: u16 = 3;
const MARGIN: u16 = 1;

fn container_width(columns: u16) -> f32 {
    f32::from(columns.saturating_sub(MARGIN * 2).max(1))
}

fn draw(out: &mut impl Write, renderer: &ChipRenderer, store: &TagStore, input: &TagInput, status: &str) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(MARGIN, 0),
        Print("Enter Tag Here:"),
        MoveTo(MARGIN, 1),
        Print(format!("> {}", input.draft())),
    )?;
    renderer.draw(out, &store.layout(), (MARGIN, CHIPS_TOP))?;

    let (_, rows) = terminal::size()?;
    queue!(out, MoveTo(MARGIN, rows.saturating_sub(1)), Print(status))?;
    out.flush()
}

fn run(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = ChipRenderer::terminal();
    let (columns, _) = terminal::size()?;
    let store = TagStore::with_tags(renderer.store_config(), CellMeasurer, container_width(columns), SEEDS)?;
    let input = TagInput::new();
    let mut status = String::from("Enter adds, click × removes, Ctrl+C quits");

    draw(out, &renderer, &store, &input, &status)?;

    loop {
        let Some(event) = poll_event(Duration::from_millis(50))? else {
            continue;
        };

        let outcome = match event {
            InputEvent::Key(key) => input.handle_key(&store, key),
            InputEvent::Click(x, y) => {
                let placement = renderer.placement(&store.layout());
                let x = f32::from(x) - f32::from(MARGIN);
                let y = f32::from(y) - f32::from(CHIPS_TOP);
                input.handle_click(&store, &placement, x, y, REMOVE_BUTTON_WIDTH)
            }
            InputEvent::Resize(columns, _) => {
                store.set_container_width(container_width(columns))?;
                Ok(InputOutcome::Edited)
            }
            InputEvent::None => Ok(InputOutcome::Ignored),
        };

        match outcome {
            Ok(InputOutcome::Exit) => return Ok(()),
            Ok(InputOutcome::Ignored) => continue,
            Ok(InputOutcome::Committed(id)) => status = format!("added {id}"),
            Ok(InputOutcome::Removed(id)) => status = format!("removed {id}"),
            Ok(InputOutcome::Edited) => {}
            Err(err) => status = format!("error: {err}"),
        }

        draw(out, &renderer, &store, &input, &status)?;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut out = stdout();

    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

    let result = run(&mut out);

    execute!(out, Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}
