//! Open-string pitches for a six-string fretted instrument.

use crate::error::TabError;
use crate::note::{Note, PitchClass};

pub const STRING_COUNT: usize = 6;

/// Highest valid semitone index (MIDI range)
const MAX_SEMITONE_INDEX: i32 = 127;

/// Six open-string pitches, lowest-numbered string first.
///
/// Each string carries a one-character label used at the start of every tab
/// line. Labels are the letter of the open pitch; a letter already used by
/// an earlier string is lowercased, so standard tuning reads `E A D G B e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    strings: [i32; STRING_COUNT],
    labels: [char; STRING_COUNT],
}

impl Tuning {
    /// E2 A2 D3 G3 B3 E4
    pub const STANDARD: Tuning = Tuning {
        strings: [40, 45, 50, 55, 59, 64],
        labels: ['E', 'A', 'D', 'G', 'B', 'e'],
    };

    /// Build a tuning from six semitone indices.
    ///
    /// # Errors
    /// Returns [`TabError::ConfigError`] unless there are exactly six entries,
    /// each within `0..=127`.
    pub fn new(strings: Vec<i32>) -> Result<Self, TabError> {
        let strings: [i32; STRING_COUNT] = strings.try_into().map_err(|v: Vec<i32>| {
            TabError::ConfigError(format!(
                "tuning must have exactly {} strings, got {}",
                STRING_COUNT,
                v.len()
            ))
        })?;

        if let Some(bad) = strings
            .iter()
            .find(|&&index| !(0..=MAX_SEMITONE_INDEX).contains(&index))
        {
            return Err(TabError::ConfigError(format!(
                "tuning pitch {} is outside 0..={}",
                bad, MAX_SEMITONE_INDEX
            )));
        }

        Ok(Self {
            strings,
            labels: derive_labels(&strings),
        })
    }

    /// Build a tuning from note names such as `["D2", "A2", "D3", "G3", "B3", "E4"]`.
    pub fn from_note_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TabError> {
        let strings = names
            .iter()
            .map(|name| Self::parse_open_string(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(strings)
    }

    /// Semitone index of a single open-string note name.
    pub fn parse_open_string(name: &str) -> Result<i32, TabError> {
        Note::parse(name)
            .semitone_index()
            .ok_or_else(|| TabError::ConfigError(format!("invalid tuning note: {:?}", name)))
    }

    /// Open-string semitone index for each string
    pub fn strings(&self) -> &[i32; STRING_COUNT] {
        &self.strings
    }

    pub fn labels(&self) -> &[char; STRING_COUNT] {
        &self.labels
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn derive_labels(strings: &[i32; STRING_COUNT]) -> [char; STRING_COUNT] {
    let mut labels = [' '; STRING_COUNT];
    for (i, &index) in strings.iter().enumerate() {
        let letter = PitchClass::from_index(index).letter();
        labels[i] = if labels[..i].contains(&letter) {
            letter.to_ascii_lowercase()
        } else {
            letter
        };
    }
    labels
}
