//! # Note Types
//!
//! Symbolic pitches as they arrive from a pitch source.
//!
//! ## Note Names
//! A note name is a pitch class followed directly by an octave number:
//! `E2`, `F#3`, `A4`, `C-1`. Pitch classes are spelled with sharps only,
//! matching the twelve names a pitch estimator emits:
//!
//! ```text
//! C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! 0  1   2  3   4  5  6   7  8   9  10  11
//! ```
//!
//! ## Semitone Index
//! `index = 12 * (octave + 1) + pitch_class_offset`, so `C-1` is 0, middle C
//! (`C4`) is 60 and the reference `A4` is 69. This is the MIDI note number.
//!
//! ## Unknown Notes
//! Anything that is not a well-formed name parses to [`Note::Unknown`]
//! instead of failing. Downstream, an unknown note becomes a rest.

use std::fmt;

/// Reference pitch for frequency conversion (A4 = 440 Hz)
const REFERENCE_FREQUENCY: f64 = 440.0;
const REFERENCE_INDEX: i32 = 69;

/// Frequencies below this are treated as unvoiced
pub const MIN_VOICED_FREQUENCY: f64 = 80.0;

/// The marker a pitch source uses for unvoiced segments
pub const UNKNOWN_MARKER: &str = "Unknown";

/// The twelve pitch classes, sharp spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Look up a pitch class by its exact name ("C", "C#", ... "B").
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|pc| pc.name() == name)
    }

    /// Pitch class for a semitone index (any octave).
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Semitones above C
    pub fn offset(self) -> i32 {
        self as i32
    }

    /// The natural letter this class is spelled on (C# -> 'C')
    pub fn letter(self) -> char {
        match self {
            PitchClass::C | PitchClass::CSharp => 'C',
            PitchClass::D | PitchClass::DSharp => 'D',
            PitchClass::E => 'E',
            PitchClass::F | PitchClass::FSharp => 'F',
            PitchClass::G | PitchClass::GSharp => 'G',
            PitchClass::A | PitchClass::ASharp => 'A',
            PitchClass::B => 'B',
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pitch as reported by the pitch source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Note {
    Named {
        pitch_class: PitchClass,
        octave: i8,
    },
    /// Unvoiced, ambiguous or unreadable pitch
    #[default]
    Unknown,
}

impl Note {
    pub fn new(pitch_class: PitchClass, octave: i8) -> Self {
        Note::Named {
            pitch_class,
            octave,
        }
    }

    /// Parse a note name such as "A4" or "F#3".
    ///
    /// Parsing is strict and total: the pitch class must be one of the twelve
    /// sharp-spelled names and must be followed immediately by a signed
    /// integer octave. Anything else, including the `Unknown` marker, yields
    /// [`Note::Unknown`].
    ///
    /// # Example
    /// ```
    /// use tabgen::{Note, PitchClass};
    ///
    /// assert_eq!(Note::parse("F#3"), Note::new(PitchClass::FSharp, 3));
    /// assert_eq!(Note::parse("H4"), Note::Unknown);
    /// assert_eq!(Note::parse("A"), Note::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        let Some(split) = s.find(|c: char| c == '-' || c.is_ascii_digit()) else {
            return Note::Unknown;
        };
        let (name, octave) = s.split_at(split);

        let Some(pitch_class) = PitchClass::from_name(name) else {
            return Note::Unknown;
        };
        match octave.parse::<i8>() {
            Ok(octave) => Note::new(pitch_class, octave),
            Err(_) => Note::Unknown,
        }
    }

    /// Nearest equal-tempered note for a frequency in Hz.
    ///
    /// Frequencies below [`MIN_VOICED_FREQUENCY`] (and non-finite values) are
    /// unvoiced. Both the pitch class and the octave come from the same
    /// rounded semitone index, so 261 Hz is `C4` rather than straddling the
    /// octave boundary.
    pub fn from_frequency(hz: f64) -> Self {
        if !hz.is_finite() || hz < MIN_VOICED_FREQUENCY {
            return Note::Unknown;
        }

        let index = (12.0 * (hz / REFERENCE_FREQUENCY).log2()).round() as i32 + REFERENCE_INDEX;
        Self::from_semitone_index(index)
    }

    /// Note for a semitone index (MIDI note number).
    pub fn from_semitone_index(index: i32) -> Self {
        match i8::try_from(index.div_euclid(12) - 1) {
            Ok(octave) => Note::new(PitchClass::from_index(index), octave),
            Err(_) => Note::Unknown,
        }
    }

    /// Semitone index, or `None` for an unknown note.
    pub fn semitone_index(&self) -> Option<i32> {
        match *self {
            Note::Named {
                pitch_class,
                octave,
            } => Some(12 * (i32::from(octave) + 1) + pitch_class.offset()),
            Note::Unknown => None,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::Named {
                pitch_class,
                octave,
            } => write!(f, "{}{}", pitch_class, octave),
            Note::Unknown => f.write_str(UNKNOWN_MARKER),
        }
    }
}
