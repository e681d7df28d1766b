pub mod config;
pub mod error;
pub mod estimate;
pub mod fretboard;
pub mod note;
pub mod tablature;
pub mod tuning;

pub use config::{RawConfig, TabConfig, TuningEntry};
pub use error::*;
pub use estimate::{parse_estimates, PitchEstimate};
pub use fretboard::{candidates, resolve, resolve_all, Position, TabEvent, DEFAULT_MAX_FRET};
pub use note::{Note, PitchClass};
pub use tablature::{render, TabLayout, TabRenderer};
pub use tuning::{Tuning, STRING_COUNT};

/// Resolve every estimate against the configured tuning.
pub fn resolve_estimates(estimates: &[PitchEstimate], config: &TabConfig) -> Vec<TabEvent> {
    let notes: Vec<Note> = estimates.iter().map(PitchEstimate::note).collect();
    resolve_all(&notes, &config.tuning, config.max_fret)
}

/// Render pitch estimates as guitar tab.
/// This is the main entry point for the library.
///
/// ```
/// use tabgen::{generate_tab, PitchEstimate, TabConfig};
///
/// let estimates = ["E4", "F4", "Unknown"].map(PitchEstimate::from_note);
/// let tab = generate_tab(&estimates, &TabConfig::default());
/// assert_eq!(tab.lines().last(), Some("e|01-"));
/// ```
pub fn generate_tab(estimates: &[PitchEstimate], config: &TabConfig) -> String {
    render(
        &resolve_estimates(estimates, config),
        &config.tuning,
        config.layout,
    )
}

/// Parse pitch-estimate JSON and render it as guitar tab.
pub fn generate_tab_from_json(json: &str, config: &TabConfig) -> Result<String, TabError> {
    let estimates = parse_estimates(json)?;
    Ok(generate_tab(&estimates, config))
}
