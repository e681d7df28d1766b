//! # Configuration
//!
//! Tab generation settings, loaded from YAML and validated up front so that
//! rendering never starts against a bad configuration.
//!
//! ```yaml
//! tuning: [D2, A2, D3, G3, B3, E4]   # note names or semitone indices
//! max-fret: 20
//! notes-per-measure: 8
//! measures-per-line: 4
//! ```
//!
//! Every key is optional; missing keys take the defaults (standard tuning,
//! fret 20, 8 notes per measure, 4 measures per line).

use serde::Deserialize;

use crate::error::TabError;
use crate::fretboard::DEFAULT_MAX_FRET;
use crate::tablature::TabLayout;
use crate::tuning::Tuning;

/// Validated settings for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabConfig {
    pub tuning: Tuning,
    pub max_fret: u8,
    pub layout: TabLayout,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::STANDARD,
            max_fret: DEFAULT_MAX_FRET,
            layout: TabLayout::default(),
        }
    }
}

/// A tuning entry, either a semitone index (`40`) or a note name (`"E2"`)
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TuningEntry {
    Index(i64),
    Name(String),
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tuning: Option<Vec<TuningEntry>>,
    pub max_fret: Option<i64>,
    pub notes_per_measure: Option<i64>,
    pub measures_per_line: Option<i64>,
}

impl RawConfig {
    pub fn from_yaml(content: &str) -> Result<Self, TabError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TabError::ConfigError(e.to_string()))
    }

    /// Values set in `over` replace the ones in `self`.
    pub fn overlay(self, over: RawConfig) -> RawConfig {
        RawConfig {
            tuning: over.tuning.or(self.tuning),
            max_fret: over.max_fret.or(self.max_fret),
            notes_per_measure: over.notes_per_measure.or(self.notes_per_measure),
            measures_per_line: over.measures_per_line.or(self.measures_per_line),
        }
    }
}

impl TabConfig {
    /// Parse and validate a YAML configuration document.
    ///
    /// # Example
    /// ```
    /// use tabgen::TabConfig;
    ///
    /// let config = TabConfig::from_yaml("notes-per-measure: 4\nmax-fret: 12")?;
    /// assert_eq!(config.layout.notes_per_measure(), 4);
    /// assert_eq!(config.layout.measures_per_line(), 4);
    /// assert_eq!(config.max_fret, 12);
    /// # Ok::<(), tabgen::TabError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, TabError> {
        Self::from_raw(RawConfig::from_yaml(content)?)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, TabError> {
        let tuning = match raw.tuning {
            Some(entries) => parse_tuning(&entries)?,
            None => Tuning::STANDARD,
        };

        let max_fret = match raw.max_fret {
            Some(value) => u8::try_from(value).map_err(|_| {
                TabError::ConfigError(format!("max-fret must be between 0 and 255, got {}", value))
            })?,
            None => DEFAULT_MAX_FRET,
        };

        let default_layout = TabLayout::default();
        let notes_per_measure = match raw.notes_per_measure {
            Some(value) => positive("notes-per-measure", value)?,
            None => default_layout.notes_per_measure(),
        };
        let measures_per_line = match raw.measures_per_line {
            Some(value) => positive("measures-per-line", value)?,
            None => default_layout.measures_per_line(),
        };

        Ok(Self {
            tuning,
            max_fret,
            layout: TabLayout::new(notes_per_measure, measures_per_line)?,
        })
    }
}

fn positive(key: &str, value: i64) -> Result<usize, TabError> {
    if value <= 0 {
        return Err(TabError::ConfigError(format!(
            "{} must be positive, got {}",
            key, value
        )));
    }
    usize::try_from(value)
        .map_err(|_| TabError::ConfigError(format!("{} is too large: {}", key, value)))
}

fn parse_tuning(entries: &[TuningEntry]) -> Result<Tuning, TabError> {
    let strings = entries
        .iter()
        .map(|entry| match entry {
            TuningEntry::Index(index) => i32::try_from(*index)
                .map_err(|_| TabError::ConfigError(format!("tuning pitch {} is out of range", index))),
            TuningEntry::Name(name) => Tuning::parse_open_string(name),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Tuning::new(strings)
}
