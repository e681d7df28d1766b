//! Pitch-estimate records as produced by a pitch source.
//!
//! A source emits one record per analysed segment:
//!
//! ```json
//! {"start_time": 0.0, "end_time": 5.0, "estimated_frequency": 329.6, "confidence": 0.71, "note": "E4"}
//! ```
//!
//! Only the order of the records matters for tablature; timing and
//! confidence are carried through for callers but not used for layout.

use serde::{Deserialize, Serialize};

use crate::error::TabError;
use crate::note::Note;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchEstimate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl PitchEstimate {
    pub fn from_note(note: impl Into<String>) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::default()
        }
    }

    /// The estimated note.
    ///
    /// Uses the `note` field when present, otherwise converts
    /// `estimated_frequency`, otherwise the segment is unknown.
    pub fn note(&self) -> Note {
        match (&self.note, self.estimated_frequency) {
            (Some(name), _) => Note::parse(name),
            (None, Some(hz)) => Note::from_frequency(hz),
            (None, None) => Note::Unknown,
        }
    }
}

/// Either a bare list of records or an analysis document that contains one
#[derive(Deserialize)]
#[serde(untagged)]
enum EstimateDocument {
    List(Vec<PitchEstimate>),
    Analysis { pitch_estimates: Vec<PitchEstimate> },
}

/// Parse pitch estimates from JSON.
///
/// Accepts `[{...}, ...]` or `{"pitch_estimates": [{...}, ...], ...}`; other
/// fields of an analysis document are ignored.
pub fn parse_estimates(json: &str) -> Result<Vec<PitchEstimate>, TabError> {
    let document: EstimateDocument = serde_json::from_str(json).map_err(|e| {
        TabError::InputError(format!(
            "expected a list of pitch estimates or an object with \"pitch_estimates\" ({})",
            e
        ))
    })?;

    Ok(match document {
        EstimateDocument::List(estimates) => estimates,
        EstimateDocument::Analysis { pitch_estimates } => pitch_estimates,
    })
}
