//! Text rendering of a cube state as an unfolded net.
//!
//! Layout is the standard cross: Up on top, then Left/Front/Right/Back in a
//! row, then Down. One letter per sticker, using the home color initials
//! W/Y/G/B/O/R (Up/Down/Front/Back/Left/Right).

use crate::cube::{CubeState, Sticker};
use crate::moves::Face;

/// Display letter for one sticker value. Values outside the six home
/// stickers (possible only for states built by hand) render as '?'.
fn sticker_char(sticker: Sticker) -> char {
    match sticker {
        0 => 'W', // Up
        1 => 'Y', // Down
        2 => 'G', // Front
        3 => 'B', // Back
        4 => 'O', // Left
        5 => 'R', // Right
        _ => '?',
    }
}

/// Formats the cube as a multi-line unfolded net.
pub fn format_net(state: &CubeState) -> String {
    let n = state.size();
    let indent = " ".repeat(n + 1);
    let mut out = String::new();

    for row in state.face(Face::Up) {
        out.push_str(&indent);
        out.extend(row.iter().map(|&s| sticker_char(s)));
        out.push('\n');
    }

    for row_index in 0..n {
        for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
            .iter()
            .enumerate()
        {
            if i > 0 {
                out.push(' ');
            }
            out.extend(
                state.face(*face)[row_index]
                    .iter()
                    .map(|&s| sticker_char(s)),
            );
        }
        out.push('\n');
    }

    for row in state.face(Face::Down) {
        out.push_str(&indent);
        out.extend(row.iter().map(|&s| sticker_char(s)));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_two_by_two_net() {
        let net = format_net(&CubeState::solved(2));
        let expected = "   WW\n   WW\nOO GG RR BB\nOO GG RR BB\n   YY\n   YY\n";
        assert_eq!(net, expected);
    }

    #[test]
    fn test_net_dimensions_scale_with_cube_size() {
        for size in 1..=7 {
            let net = format_net(&CubeState::solved(size));
            let lines: Vec<&str> = net.lines().collect();
            assert_eq!(lines.len(), 3 * size);
            // middle band: four faces plus three separators
            assert_eq!(lines[size].len(), 4 * size + 3);
        }
    }
}
