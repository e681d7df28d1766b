//! # Tablature Renderer
//!
//! Turns a sequence of [`TabEvent`]s into six lines of ASCII tab.
//!
//! ## Output Format
//! ```text
//! E|--------|--------|
//! E|----
//! A|--------|--------|
//! A|----
//! ...
//! e|01------|--------|
//! e|----
//! ```
//! Each string is a logical line seeded with its label and `|`. An event adds
//! one column per string: the fret number on the sounding string (no padding,
//! `12` takes two characters) and `-` everywhere else. Every
//! `notes_per_measure` events close a measure with `|`, and every
//! `measures_per_line` measures continue the string on a new display line.
//! The six logical lines are joined with `\n`, so wrapped strings keep their
//! continuation rows together rather than interleaving with other strings.
//!
//! ## End of Input
//! A bar closed by the final event is stripped. A line wrap is only opened
//! when another event arrives, so the output never ends in an empty
//! `E|` continuation row.

use tracing::debug;

use crate::error::TabError;
use crate::fretboard::TabEvent;
use crate::tuning::{Tuning, STRING_COUNT};

pub const BAR: char = '|';
pub const REST: char = '-';

pub const DEFAULT_NOTES_PER_MEASURE: usize = 8;
pub const DEFAULT_MEASURES_PER_LINE: usize = 4;

/// Measure sizing. Both values are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout {
    notes_per_measure: usize,
    measures_per_line: usize,
}

impl TabLayout {
    /// # Errors
    /// Returns [`TabError::ConfigError`] if either value is zero.
    pub fn new(notes_per_measure: usize, measures_per_line: usize) -> Result<Self, TabError> {
        if notes_per_measure == 0 {
            return Err(TabError::ConfigError(
                "notes-per-measure must be positive, got 0".to_string(),
            ));
        }
        if measures_per_line == 0 {
            return Err(TabError::ConfigError(
                "measures-per-line must be positive, got 0".to_string(),
            ));
        }
        Ok(Self {
            notes_per_measure,
            measures_per_line,
        })
    }

    pub fn notes_per_measure(&self) -> usize {
        self.notes_per_measure
    }

    pub fn measures_per_line(&self) -> usize {
        self.measures_per_line
    }
}

impl Default for TabLayout {
    fn default() -> Self {
        Self {
            notes_per_measure: DEFAULT_NOTES_PER_MEASURE,
            measures_per_line: DEFAULT_MEASURES_PER_LINE,
        }
    }
}

/// Accumulates events into six string lines.
///
/// One renderer produces one tab; it owns its buffers and is consumed by
/// [`TabRenderer::finish`].
#[derive(Debug, Clone)]
pub struct TabRenderer {
    labels: [char; STRING_COUNT],
    lines: [String; STRING_COUNT],
    layout: TabLayout,
    notes_in_measure: usize,
    measures_in_line: usize,
    /// A line boundary was reached; the next event opens a new display line
    wrap_pending: bool,
    /// The last event closed a measure
    ends_with_bar: bool,
    events: usize,
}

impl TabRenderer {
    pub fn new(tuning: &Tuning, layout: TabLayout) -> Self {
        let labels = *tuning.labels();
        Self {
            labels,
            lines: labels.map(seed),
            layout,
            notes_in_measure: 0,
            measures_in_line: 0,
            wrap_pending: false,
            ends_with_bar: false,
            events: 0,
        }
    }

    pub fn push(&mut self, event: TabEvent) {
        if self.wrap_pending {
            for (line, &label) in self.lines.iter_mut().zip(&self.labels) {
                line.push('\n');
                line.push_str(&seed(label));
            }
            self.wrap_pending = false;
        }

        let position = event.position();
        for (string, line) in self.lines.iter_mut().enumerate() {
            match position {
                Some(p) if p.string == string => line.push_str(&p.fret.to_string()),
                _ => line.push(REST),
            }
        }
        self.events += 1;
        self.ends_with_bar = false;

        self.notes_in_measure += 1;
        if self.notes_in_measure == self.layout.notes_per_measure {
            for line in &mut self.lines {
                line.push(BAR);
            }
            self.notes_in_measure = 0;
            self.ends_with_bar = true;

            self.measures_in_line += 1;
            if self.measures_in_line == self.layout.measures_per_line {
                self.measures_in_line = 0;
                self.wrap_pending = true;
            }
        }
    }

    /// Strip a trailing bar and join the six lines.
    pub fn finish(mut self) -> String {
        if self.ends_with_bar {
            for line in &mut self.lines {
                line.pop();
            }
        }

        debug!(
            "rendered {} events ({} per measure, {} measures per line)",
            self.events, self.layout.notes_per_measure, self.layout.measures_per_line
        );
        self.lines.join("\n")
    }
}

impl Extend<TabEvent> for TabRenderer {
    fn extend<I: IntoIterator<Item = TabEvent>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }
}

fn seed(label: char) -> String {
    let mut line = String::with_capacity(2);
    line.push(label);
    line.push(BAR);
    line
}

/// Render a whole event sequence.
///
/// # Example
/// ```
/// use tabgen::{render, Position, TabEvent, TabLayout, Tuning};
///
/// let events = [
///     TabEvent::Position(Position { string: 5, fret: 0 }),
///     TabEvent::Position(Position { string: 5, fret: 12 }),
///     TabEvent::Rest,
/// ];
/// let tab = render(&events, &Tuning::STANDARD, TabLayout::new(4, 4)?);
/// assert_eq!(tab.lines().last(), Some("e|012-"));
/// # Ok::<(), tabgen::TabError>(())
/// ```
pub fn render(events: &[TabEvent], tuning: &Tuning, layout: TabLayout) -> String {
    let mut renderer = TabRenderer::new(tuning, layout);
    renderer.extend(events.iter().copied());
    renderer.finish()
}
