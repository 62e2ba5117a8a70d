//! Facelet state of an N×N cube and the move-application engine.
//!
//! Each face holds a row-major N×N grid of opaque sticker values. A quarter
//! turn rotates the moving face's own grid clockwise and cyclically shifts
//! one border row/column on each of the four adjacent faces (the "rim").
//! Wide moves repeat the rim shift at increasing depths, so `Rw` moves the
//! outer Right slice together with the slice beneath it.
//!
//! Every move is a permutation of stickers: nothing is created, destroyed,
//! or recolored, which the tests lean on heavily.

use crate::moves::{Face, Move};

/// An opaque sticker identity. Solved faces carry their face's home value.
pub type Sticker = u8;

/// A row or column of one face at a fixed index.
#[derive(Clone, Copy)]
enum Line {
    Row(usize),
    Col(usize),
}

/// One leg of a rim 4-cycle: which strip of which face moves, and whether
/// the incoming values arrive reversed.
///
/// The reversal flags are not symmetric across faces. Adjacent faces meet
/// with different row/column orientations, so some hand-offs flip the strip
/// and some do not; the table in [`rim_cycle`] is the single authority.
#[derive(Clone, Copy)]
struct Strip {
    face: Face,
    line: Line,
    rev: bool,
}

const fn strip(face: Face, line: Line, rev: bool) -> Strip {
    Strip { face, line, rev }
}

/// The rim 4-cycle for turning `face` clockwise at slice `depth`.
///
/// Entries are ordered so that strip `i` receives strip `i + 1`'s old values
/// (the last strip receives the first strip's saved values). Each entry's
/// `rev` flag applies to the values written *into* it. Depth 0 is the
/// outermost slice; `m = n - 1 - depth` mirrors the depth to the far edge
/// of faces whose strip is indexed from the opposite side.
fn rim_cycle(face: Face, depth: usize, n: usize) -> [Strip; 4] {
    let d = depth;
    let m = n - 1 - depth;
    match face {
        Face::Right => [
            strip(Face::Front, Line::Col(m), false),
            strip(Face::Down, Line::Col(m), true),
            strip(Face::Back, Line::Col(d), true),
            strip(Face::Up, Line::Col(m), false),
        ],
        Face::Left => [
            strip(Face::Front, Line::Col(d), false),
            strip(Face::Up, Line::Col(d), true),
            strip(Face::Back, Line::Col(m), true),
            strip(Face::Down, Line::Col(d), false),
        ],
        Face::Up => [
            strip(Face::Front, Line::Row(d), false),
            strip(Face::Right, Line::Row(d), false),
            strip(Face::Back, Line::Row(d), false),
            strip(Face::Left, Line::Row(d), false),
        ],
        Face::Down => [
            strip(Face::Front, Line::Row(m), false),
            strip(Face::Left, Line::Row(m), false),
            strip(Face::Back, Line::Row(m), false),
            strip(Face::Right, Line::Row(m), false),
        ],
        Face::Front => [
            strip(Face::Up, Line::Row(m), true),
            strip(Face::Left, Line::Col(m), false),
            strip(Face::Down, Line::Row(d), true),
            strip(Face::Right, Line::Col(d), false),
        ],
        Face::Back => [
            strip(Face::Up, Line::Row(d), false),
            strip(Face::Right, Line::Col(m), true),
            strip(Face::Down, Line::Row(m), false),
            strip(Face::Left, Line::Col(d), true),
        ],
    }
}

/// The full facelet state of one cube.
///
/// The size is fixed at construction; all mutation goes through [`apply`]
/// and its token-level wrappers, each of which either updates all six grids
/// consistently or (for unparseable tokens) leaves the state untouched.
///
/// [`apply`]: CubeState::apply
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState {
    size: usize,
    faces: [Vec<Vec<Sticker>>; 6],
}

impl CubeState {
    /// Creates a solved cube: each face uniformly filled with its home sticker.
    pub fn solved(size: usize) -> Self {
        assert!(size >= 1, "cube size must be at least 1");
        let faces = Face::ALL.map(|face| vec![vec![face.home_sticker(); size]; size]);
        Self { size, faces }
    }

    /// Edge length of this cube.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read access to one face's row-major grid, for rendering collaborators.
    pub fn face(&self, face: Face) -> &[Vec<Sticker>] {
        &self.faces[face.index()]
    }

    /// Applies one structured move in place.
    ///
    /// Per quarter turn: the moving face's grid rotates 90° clockwise, then
    /// the rim shifts at every depth `0..layers`. A layer count larger than
    /// the cube is a caller bug, not a runtime condition.
    pub fn apply(&mut self, mv: Move) {
        assert!(
            (1..=self.size).contains(&mv.layers),
            "layer count {} exceeds cube size {}",
            mv.layers,
            self.size
        );
        assert!(
            (1..=3).contains(&mv.quarter_turns),
            "quarter turn count {} out of range",
            mv.quarter_turns
        );
        for _ in 0..mv.quarter_turns {
            self.rotate_face_cw(mv.face);
            for depth in 0..mv.layers {
                self.rotate_rim(mv.face, depth);
            }
        }
    }

    /// Parses and applies one token; unrecognized tokens are no-ops.
    pub fn apply_token(&mut self, token: &str) {
        if let Some(mv) = Move::parse(token) {
            self.apply(mv);
        }
    }

    /// Applies a whitespace-separated move sequence, token by token.
    pub fn apply_sequence(&mut self, moves: &str) {
        for token in moves.split_whitespace() {
            self.apply_token(token);
        }
    }

    /// Rotates a face's own grid 90° clockwise: (i, j) moves to (j, n−1−i).
    fn rotate_face_cw(&mut self, face: Face) {
        let n = self.size;
        let grid = &mut self.faces[face.index()];
        let old = grid.clone();
        for i in 0..n {
            for j in 0..n {
                grid[j][n - 1 - i] = old[i][j];
            }
        }
    }

    /// Cyclically shifts the four rim strips for `face` at one slice depth.
    fn rotate_rim(&mut self, face: Face, depth: usize) {
        let cycle = rim_cycle(face, depth, self.size);
        let saved = self.line_values(cycle[0]);
        for i in 0..3 {
            let values = self.line_values(cycle[i + 1]);
            self.set_line(cycle[i], values);
        }
        self.set_line(cycle[3], saved);
    }

    fn line_values(&self, strip: Strip) -> Vec<Sticker> {
        let grid = &self.faces[strip.face.index()];
        match strip.line {
            Line::Row(r) => grid[r].clone(),
            Line::Col(c) => grid.iter().map(|row| row[c]).collect(),
        }
    }

    fn set_line(&mut self, strip: Strip, mut values: Vec<Sticker>) {
        if strip.rev {
            values.reverse();
        }
        let grid = &mut self.faces[strip.face.index()];
        match strip.line {
            Line::Row(r) => grid[r] = values,
            Line::Col(c) => {
                for (row, value) in grid.iter_mut().zip(values) {
                    row[c] = value;
                }
            }
        }
    }
}
