//! Symbol shapes

use std::fmt;

/// Shape assigned to a symbol interpretation
///
/// Only the shapes that matter around stem measurement are distinguished;
/// everything else the recognizer produces maps to one of the generic
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    ThickBarline,
    ThinBarline,
    ThickConnector,
    ThinConnector,
    Bracket,
    Brace,
    Stem,
    Beam,
    Ledger,
    NoteheadBlack,
    NoteheadVoid,
    WholeNote,
    Clef,
    KeySignature,
    TimeSignature,
    Accidental,
    Rest,
    Flag,
    AugmentationDot,
    Slur,
    Text,
}

impl Shape {
    /// Barlines, connectors, brackets and braces.
    ///
    /// These belong to the page structure and can always be hidden from
    /// later measurements, whatever their recognition grade.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Shape::ThickBarline
                | Shape::ThinBarline
                | Shape::ThickConnector
                | Shape::ThinConnector
                | Shape::Bracket
                | Shape::Brace
        )
    }

    /// Vertical strokes that would pollute a stem-width histogram
    pub fn stem_like() -> [Shape; 4] {
        [
            Shape::ThickBarline,
            Shape::ThickConnector,
            Shape::ThinBarline,
            Shape::ThinConnector,
        ]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::ThickBarline => "THICK_BARLINE",
            Shape::ThinBarline => "THIN_BARLINE",
            Shape::ThickConnector => "THICK_CONNECTOR",
            Shape::ThinConnector => "THIN_CONNECTOR",
            Shape::Bracket => "BRACKET",
            Shape::Brace => "BRACE",
            Shape::Stem => "STEM",
            Shape::Beam => "BEAM",
            Shape::Ledger => "LEDGER",
            Shape::NoteheadBlack => "NOTEHEAD_BLACK",
            Shape::NoteheadVoid => "NOTEHEAD_VOID",
            Shape::WholeNote => "WHOLE_NOTE",
            Shape::Clef => "CLEF",
            Shape::KeySignature => "KEY_SIGNATURE",
            Shape::TimeSignature => "TIME_SIGNATURE",
            Shape::Accidental => "ACCIDENTAL",
            Shape::Rest => "REST",
            Shape::Flag => "FLAG",
            Shape::AugmentationDot => "AUGMENTATION_DOT",
            Shape::Slur => "SLUR",
            Shape::Text => "TEXT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_shapes() {
        assert!(Shape::Brace.is_structural());
        assert!(Shape::ThinConnector.is_structural());
        assert!(!Shape::Stem.is_structural());
        assert!(Shape::stem_like().iter().all(|s| s.is_structural()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::ThickBarline.to_string(), "THICK_BARLINE");
        assert_eq!(Shape::NoteheadBlack.to_string(), "NOTEHEAD_BLACK");
    }
}
