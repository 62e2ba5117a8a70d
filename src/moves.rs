//! Move notation: faces, structured move descriptors, and the token parser.
//!
//! A token follows the grammar `[digit] face ["w"] [modifier]` where
//! `face` is one of R/L/U/D/F/B and `modifier` is `2` or `'`. Examples:
//! `R`, `U2`, `Rw'`, `3Rw2`. Unrecognized tokens parse to `None` and are
//! treated as no-ops by callers.

/// One of the six fixed outer surfaces of the puzzle.
///
/// The discriminant doubles as the face's home sticker value, assigned
/// once at construction; the engine itself never inspects sticker identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

/// A turning axis shared by two opposite faces.
///
/// Used by the scramble generator's anti-redundancy rule: three consecutive
/// moves on one axis (e.g. R L R) commute into fewer moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    RightLeft,
    UpDown,
    FrontBack,
}

impl Face {
    /// All six faces, in sticker-value order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
    ];

    /// Position of this face in [`Face::ALL`] and in per-face storage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The sticker value a solved cube carries on this face.
    #[inline]
    pub fn home_sticker(self) -> u8 {
        self as u8
    }

    /// The notation letter for this face.
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Parses a notation letter; only uppercase letters are part of the grammar.
    pub fn from_letter(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            _ => None,
        }
    }

    /// The axis this face turns around. Opposite faces share an axis.
    pub fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::RightLeft,
            Face::Up | Face::Down => Axis::UpDown,
            Face::Front | Face::Back => Axis::FrontBack,
        }
    }
}

/// A structured move descriptor, parsed once from a notation token.
///
/// `layers` counts how many slices turn together with the outer layer:
/// 1 for a standard move, 2 for `Rw`, 3 for `3Rw`, and so on. `quarter_turns`
/// is 1 for a plain token, 2 for a `2` suffix, 3 for a prime suffix (three
/// clockwise quarter turns equal one counter-clockwise turn).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub face: Face,
    pub layers: usize,
    pub quarter_turns: u8,
}

impl Move {
    /// Parses a single whitespace-free token into a move descriptor.
    ///
    /// Returns `None` for anything outside the grammar (including a zero
    /// layer prefix); malformed tokens are silent no-ops by policy, so
    /// callers needing strict validation must pre-validate their vocabulary.
    pub fn parse(token: &str) -> Option<Move> {
        let first = token.chars().next()?;
        let mut rest = token;

        // a leading digit is an explicit layer count, e.g. the 3 in "3Rw'"
        let mut explicit_layers = None;
        if let Some(count) = first.to_digit(10) {
            if count == 0 {
                return None;
            }
            explicit_layers = Some(count as usize);
            rest = &token[first.len_utf8()..];
        }

        let face = rest.chars().find_map(Face::from_letter)?;

        // an un-prefixed wide marker means "outer layer plus one beneath";
        // an explicit prefix is used verbatim whether or not "w" is present
        let wide = rest.contains('w');
        let layers = explicit_layers.unwrap_or(if wide { 2 } else { 1 });

        let double = rest.contains('2');
        let prime = rest.contains('\'');
        // a token carrying both markers is outside any well-formed vocabulary
        debug_assert!(
            !(double && prime),
            "move token mixes double and prime markers: {token:?}"
        );
        let quarter_turns = if double {
            2
        } else if prime {
            3
        } else {
            1
        };

        Some(Move {
            face,
            layers,
            quarter_turns,
        })
    }
}
