//! Supported puzzle sizes and their scramble vocabularies.
//!
//! Each size carries a fixed target scramble length and a fixed set of legal
//! base moves: the 2×2 restricts to three faces (its other three are the
//! same turns seen from the opposite side), the 3×3 uses all six faces, and
//! bigger cubes add wide variants.

use clap::ValueEnum;

use crate::moves::Face;

/// A base move in a scramble vocabulary: a face, optionally turned wide.
///
/// Modifiers (prime/double) are chosen separately at generation time, so the
/// vocabulary only enumerates bases.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScrambleMove {
    pub face: Face,
    pub wide: bool,
}

impl ScrambleMove {
    /// Renders the base token, e.g. `R` or `Rw`.
    pub fn base_token(&self) -> String {
        if self.wide {
            format!("{}w", self.face.letter())
        } else {
            self.face.letter().to_string()
        }
    }
}

const fn outer(face: Face) -> ScrambleMove {
    ScrambleMove { face, wide: false }
}

const fn wide(face: Face) -> ScrambleMove {
    ScrambleMove { face, wide: true }
}

/// The 2×2 vocabulary: R/U/F only.
const MOVES_2X2: &[ScrambleMove] = &[outer(Face::Right), outer(Face::Up), outer(Face::Front)];

/// The 3×3 vocabulary: all six outer faces.
const MOVES_3X3: &[ScrambleMove] = &[
    outer(Face::Right),
    outer(Face::Left),
    outer(Face::Up),
    outer(Face::Down),
    outer(Face::Front),
    outer(Face::Back),
];

/// The big-cube vocabulary: all six faces plus their wide variants.
const MOVES_BIG: &[ScrambleMove] = &[
    outer(Face::Right),
    outer(Face::Left),
    outer(Face::Up),
    outer(Face::Down),
    outer(Face::Front),
    outer(Face::Back),
    wide(Face::Right),
    wide(Face::Left),
    wide(Face::Up),
    wide(Face::Down),
    wide(Face::Front),
    wide(Face::Back),
];

/// One of the six supported puzzle sizes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ValueEnum)]
pub enum PuzzleKind {
    #[value(name = "2x2")]
    TwoByTwo,
    #[value(name = "3x3")]
    ThreeByThree,
    #[value(name = "4x4")]
    FourByFour,
    #[value(name = "5x5")]
    FiveByFive,
    #[value(name = "6x6")]
    SixBySix,
    #[value(name = "7x7")]
    SevenBySeven,
}

impl PuzzleKind {
    /// All supported sizes, smallest first.
    pub const ALL: [PuzzleKind; 6] = [
        PuzzleKind::TwoByTwo,
        PuzzleKind::ThreeByThree,
        PuzzleKind::FourByFour,
        PuzzleKind::FiveByFive,
        PuzzleKind::SixBySix,
        PuzzleKind::SevenBySeven,
    ];

    /// Edge length of the cube.
    pub fn size(self) -> usize {
        match self {
            PuzzleKind::TwoByTwo => 2,
            PuzzleKind::ThreeByThree => 3,
            PuzzleKind::FourByFour => 4,
            PuzzleKind::FiveByFive => 5,
            PuzzleKind::SixBySix => 6,
            PuzzleKind::SevenBySeven => 7,
        }
    }

    /// Fixed number of tokens in a generated scramble.
    pub fn scramble_length(self) -> usize {
        match self {
            PuzzleKind::TwoByTwo => 9,
            PuzzleKind::ThreeByThree => 20,
            PuzzleKind::FourByFour => 44,
            PuzzleKind::FiveByFive => 60,
            PuzzleKind::SixBySix => 80,
            PuzzleKind::SevenBySeven => 100,
        }
    }

    /// The legal base moves for scrambles of this size.
    pub fn vocabulary(self) -> &'static [ScrambleMove] {
        match self {
            PuzzleKind::TwoByTwo => MOVES_2X2,
            PuzzleKind::ThreeByThree => MOVES_3X3,
            PuzzleKind::FourByFour
            | PuzzleKind::FiveByFive
            | PuzzleKind::SixBySix
            | PuzzleKind::SevenBySeven => MOVES_BIG,
        }
    }

    /// Human-facing name, e.g. `4x4`.
    pub fn display_name(self) -> &'static str {
        match self {
            PuzzleKind::TwoByTwo => "2x2",
            PuzzleKind::ThreeByThree => "3x3",
            PuzzleKind::FourByFour => "4x4",
            PuzzleKind::FiveByFive => "5x5",
            PuzzleKind::SixBySix => "6x6",
            PuzzleKind::SevenBySeven => "7x7",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn test_vocabulary_tokens_parse_to_matching_moves() {
        for kind in PuzzleKind::ALL {
            for base in kind.vocabulary() {
                let mv = Move::parse(&base.base_token()).unwrap();
                assert_eq!(mv.face, base.face);
                assert_eq!(mv.layers, if base.wide { 2 } else { 1 });
            }
        }
    }

    #[test]
    fn test_wide_moves_only_appear_on_big_cubes() {
        for kind in PuzzleKind::ALL {
            let has_wide = kind.vocabulary().iter().any(|m| m.wide);
            assert_eq!(has_wide, kind.size() >= 4, "{}", kind.display_name());
        }
    }

    #[test]
    fn test_two_by_two_restricts_to_three_faces() {
        let faces: Vec<Face> = MOVES_2X2.iter().map(|m| m.face).collect();
        assert_eq!(faces, vec![Face::Right, Face::Up, Face::Front]);
    }

    #[test]
    fn test_scramble_lengths_grow_with_size() {
        let lengths: Vec<usize> = PuzzleKind::ALL
            .iter()
            .map(|kind| kind.scramble_length())
            .collect();
        assert_eq!(lengths, vec![9, 20, 44, 60, 80, 100]);
    }
}
