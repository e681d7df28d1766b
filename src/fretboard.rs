//! # Fretboard Resolver
//!
//! Maps a note to a playable (string, fret) position for a given tuning.
//!
//! ## Candidates
//! For each string `i`, `fret = note_index - tuning[i]`. The string is a
//! candidate when `0 <= fret <= max_fret`. A note can have zero, one or
//! several candidates: on a standard guitar `E4` is the open high string, the
//! 5th fret of the B string, the 9th fret of the G string and so on.
//!
//! ## Selection
//! The candidate with the lowest fret wins. If two strings reach the note at
//! the same fret (only possible with repeated open pitches), the lower string
//! index wins. Notes with no candidate, unknown notes and malformed names all
//! resolve to [`TabEvent::Rest`].

use serde::Serialize;
use tracing::debug;

use crate::note::Note;
use crate::tuning::Tuning;

/// Default highest usable fret
pub const DEFAULT_MAX_FRET: u8 = 20;

/// A fretted (or open) string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// 0 is the first string of the tuning (low E in standard tuning)
    pub string: usize,
    pub fret: u8,
}

/// One column of tablature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabEvent {
    Position(Position),
    Rest,
}

impl TabEvent {
    pub fn position(&self) -> Option<Position> {
        match self {
            TabEvent::Position(position) => Some(*position),
            TabEvent::Rest => None,
        }
    }
}

/// Every playable position for `note`, in string order.
pub fn candidates(note: &Note, tuning: &Tuning, max_fret: u8) -> Vec<Position> {
    let Some(index) = note.semitone_index() else {
        return Vec::new();
    };

    tuning
        .strings()
        .iter()
        .enumerate()
        .filter_map(|(string, &open)| {
            let fret = index - open;
            (0..=i32::from(max_fret))
                .contains(&fret)
                .then(|| Position {
                    string,
                    fret: fret as u8,
                })
        })
        .collect()
}

/// Pick the lowest-fret position for `note`, breaking ties on the lower string.
///
/// # Example
/// ```
/// use tabgen::{resolve, Note, Position, TabEvent, Tuning};
///
/// let event = resolve(&Note::parse("E4"), &Tuning::STANDARD, 20);
/// assert_eq!(event, TabEvent::Position(Position { string: 5, fret: 0 }));
///
/// // Below the lowest open string
/// assert_eq!(resolve(&Note::parse("C2"), &Tuning::STANDARD, 20), TabEvent::Rest);
/// ```
pub fn resolve(note: &Note, tuning: &Tuning, max_fret: u8) -> TabEvent {
    let event = candidates(note, tuning, max_fret)
        .into_iter()
        .min_by_key(|position| (position.fret, position.string))
        .map_or(TabEvent::Rest, TabEvent::Position);

    debug!("resolved {} -> {:?}", note, event);
    event
}

/// Resolve a sequence of notes, one event per note in input order.
pub fn resolve_all<'a, I>(notes: I, tuning: &Tuning, max_fret: u8) -> Vec<TabEvent>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .map(|note| resolve(note, tuning, max_fret))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(string: usize, fret: u8) -> TabEvent {
        TabEvent::Position(Position { string, fret })
    }

    fn resolve_std(name: &str) -> TabEvent {
        resolve(&Note::parse(name), &Tuning::STANDARD, DEFAULT_MAX_FRET)
    }

    #[test]
    fn test_open_high_string_beats_higher_frets() {
        // E4 is also B string fret 5, G fret 9, D fret 14, A fret 19
        assert_eq!(resolve_std("E4"), at(5, 0));
    }

    #[test]
    fn test_lowest_fret_selected() {
        assert_eq!(resolve_std("E2"), at(0, 0));
        assert_eq!(resolve_std("F4"), at(5, 1));
        assert_eq!(resolve_std("A4"), at(5, 5));
        assert_eq!(resolve_std("C4"), at(4, 1));
        assert_eq!(resolve_std("G#2"), at(0, 4));
        assert_eq!(resolve_std("A2"), at(1, 0));
    }

    #[test]
    fn test_candidates_in_string_order() {
        let positions = candidates(&Note::parse("E4"), &Tuning::STANDARD, DEFAULT_MAX_FRET);
        let frets: Vec<(usize, u8)> = positions.iter().map(|p| (p.string, p.fret)).collect();
        assert_eq!(frets, vec![(1, 19), (2, 14), (3, 9), (4, 5), (5, 0)]);
    }

    #[test]
    fn test_out_of_range_is_rest() {
        assert_eq!(resolve_std("C2"), TabEvent::Rest);
        assert_eq!(resolve_std("D#2"), TabEvent::Rest);
        // Highest playable is E4 + 20 = C6
        assert_eq!(resolve_std("C6"), at(5, 20));
        assert_eq!(resolve_std("C#6"), TabEvent::Rest);
    }

    #[test]
    fn test_max_fret_bound() {
        let note = Note::parse("C#6");
        assert_eq!(resolve(&note, &Tuning::STANDARD, 21), at(5, 21));
        assert_eq!(resolve(&Note::parse("F2"), &Tuning::STANDARD, 0), TabEvent::Rest);
        assert_eq!(resolve(&Note::parse("D3"), &Tuning::STANDARD, 0), at(2, 0));
    }

    #[test]
    fn test_unknown_and_malformed_are_rests() {
        for name in ["Unknown", "H4", "A", ""] {
            assert_eq!(resolve_std(name), TabEvent::Rest, "input {:?}", name);
        }
    }

    #[test]
    fn test_tie_on_fret_picks_lowest_string() {
        let tuning = Tuning::new(vec![50, 45, 50, 55, 59, 64]).unwrap();
        assert_eq!(resolve(&Note::parse("E3"), &tuning, DEFAULT_MAX_FRET), at(0, 2));
        let tuning = Tuning::new(vec![64, 64, 64, 64, 64, 64]).unwrap();
        assert_eq!(resolve(&Note::parse("G4"), &tuning, DEFAULT_MAX_FRET), at(0, 3));
    }

    #[test]
    fn test_resolve_all_keeps_order() {
        let notes: Vec<Note> = ["E4", "Unknown", "E2"].iter().map(|n| Note::parse(n)).collect();
        let events = resolve_all(&notes, &Tuning::STANDARD, DEFAULT_MAX_FRET);
        assert_eq!(events, vec![at(5, 0), TabEvent::Rest, at(0, 0)]);
    }

    #[test]
    fn test_event_serialization() {
        assert_eq!(
            serde_json::to_string(&at(5, 0)).unwrap(),
            r#"{"position":{"string":5,"fret":0}}"#
        );
        assert_eq!(serde_json::to_string(&TabEvent::Rest).unwrap(), r#""rest""#);
    }
}
