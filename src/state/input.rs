//! Input Module - Draft text field and event conversion
//!
//! Bridges crossterm's event system with the tag store. The draft is the
//! text field's binding target: typing edits it, Enter commits it as a tag
//! and clears it.
//!
//! # API
//!
//! - `TagInput::handle_key` - Apply a key event to the draft / store
//! - `TagInput::handle_click` - Remove the chip whose remove button was hit
//! - `poll_event` / `read_event` - Crossterm event polling
//!
//! # Example
//!
//! ```ignore
//! use tagflow::state::{poll_event, InputEvent, TagInput};
//! use std::time::Duration;
//!
//! let input = TagInput::new();
//! loop {
//!     if let Ok(Some(InputEvent::Key(key))) = poll_event(Duration::from_millis(16)) {
//!         input.handle_key(&store, key)?;
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{
    poll, read, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use spark_signals::{signal, Signal};
use tracing::debug;

use crate::error::Result;
use crate::layout::Placement;
use crate::types::TagId;

use super::tag_store::TagStore;

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Events the tag input reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Left button press at (column, row)
    Click(u16, u16),
    /// Terminal resize (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

/// What a key or click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    /// Draft text changed
    Edited,
    /// Draft committed as a new tag
    Committed(TagId),
    /// Tag removed through its chip
    Removed(TagId),
    /// Ctrl+C
    Exit,
}

// =============================================================================
// TAG INPUT
// =============================================================================

/// The draft text field of a tag input.
#[derive(Clone)]
pub struct TagInput {
    draft: Signal<String>,
}

impl TagInput {
    pub fn new() -> Self {
        Self {
            draft: signal(String::new()),
        }
    }

    /// Current draft text.
    pub fn draft(&self) -> String {
        self.draft.get()
    }

    /// The draft as a signal, for renderers binding the text field.
    pub fn draft_signal(&self) -> Signal<String> {
        self.draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.draft.set(text.into());
    }

    /// Commit the draft as a tag and clear it.
    ///
    /// The draft is kept when the store rejects it.
    pub fn commit(&self, store: &TagStore) -> Result<TagId> {
        let id = store.add_tag(self.draft())?;
        self.draft.set(String::new());
        Ok(id)
    }

    /// Apply a key event. Release events are ignored.
    pub fn handle_key(&self, store: &TagStore, event: KeyEvent) -> Result<InputOutcome> {
        if event.kind == KeyEventKind::Release {
            return Ok(InputOutcome::Ignored);
        }

        let outcome = match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputOutcome::Exit
            }
            KeyCode::Char(_) if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                InputOutcome::Ignored
            }
            KeyCode::Char(c) => {
                let mut draft = self.draft();
                draft.push(c);
                self.draft.set(draft);
                InputOutcome::Edited
            }
            KeyCode::Backspace => {
                let mut draft = self.draft();
                if draft.pop().is_none() {
                    return Ok(InputOutcome::Ignored);
                }
                self.draft.set(draft);
                InputOutcome::Edited
            }
            KeyCode::Esc => {
                if self.draft().is_empty() {
                    return Ok(InputOutcome::Ignored);
                }
                self.draft.set(String::new());
                InputOutcome::Edited
            }
            KeyCode::Enter => InputOutcome::Committed(self.commit(store)?),
            _ => InputOutcome::Ignored,
        };

        debug!(?outcome, "handled key");
        Ok(outcome)
    }

    /// Remove the chip whose trailing `button_width` cells contain the point.
    pub fn handle_click(
        &self,
        store: &TagStore,
        placement: &Placement,
        x: f32,
        y: f32,
        button_width: f32,
    ) -> Result<InputOutcome> {
        let Some(chip) = placement.chip_at(x, y) else {
            return Ok(InputOutcome::Ignored);
        };

        if x < chip.x + chip.width - button_width {
            return Ok(InputOutcome::Ignored);
        }

        let id = chip.id.clone();
        if store.remove_tag(&id)? {
            Ok(InputOutcome::Removed(id))
        } else {
            Ok(InputOutcome::Ignored)
        }
    }
}

impl Default for TagInput {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Convert a crossterm event into an input event.
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Key(key) => InputEvent::Key(key),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputEvent::Click(mouse.column, mouse.row),
            _ => InputEvent::None,
        },
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// TESTS
// =============================================================================
