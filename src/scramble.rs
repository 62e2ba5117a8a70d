//! Randomized scramble generation with anti-cancellation filtering.
//!
//! A scramble is a fixed-length sequence of notation tokens drawn from the
//! puzzle's vocabulary. Two constraints keep it non-redundant: the same base
//! face never appears twice in a row, and no three consecutive moves fall on
//! one axis (R L R collapses to two turns of the R/L axis).

use fastrand::Rng;

use crate::puzzles::{PuzzleKind, ScrambleMove};

/// Turn modifiers appended to a base token, each equally likely.
const MODIFIERS: &[&str] = &["", "'", "2"];

/// Generates a scramble with a fresh random source.
pub fn generate(kind: PuzzleKind) -> String {
    generate_with(kind, &mut Rng::new())
}

/// Generates a scramble from the given random source.
///
/// A seeded [`Rng`] makes the output reproducible; aside from the random
/// choices the generator is pure. The result always contains exactly
/// `kind.scramble_length()` space-separated tokens.
pub fn generate_with(kind: PuzzleKind, rng: &mut Rng) -> String {
    let vocabulary = kind.vocabulary();
    let mut tokens: Vec<String> = Vec::with_capacity(kind.scramble_length());
    let mut last: Option<ScrambleMove> = None;
    let mut second_last: Option<ScrambleMove> = None;

    for _ in 0..kind.scramble_length() {
        let mut pool: Vec<ScrambleMove> = vocabulary
            .iter()
            .copied()
            .filter(|candidate| allowed(*candidate, last, second_last))
            .collect();
        if pool.is_empty() {
            // degenerate vocabularies can filter everything out; fall back
            // to the full vocabulary for this position
            pool = vocabulary.to_vec();
        }

        let chosen = rng
            .choice(pool.iter().copied())
            .expect("scramble vocabulary is never empty");
        let modifier = rng
            .choice(MODIFIERS.iter().copied())
            .expect("modifier table is never empty");
        tokens.push(format!("{}{}", chosen.base_token(), modifier));

        second_last = last;
        last = Some(chosen);
    }

    tokens.join(" ")
}

/// Applies the two history constraints to one candidate.
fn allowed(
    candidate: ScrambleMove,
    last: Option<ScrambleMove>,
    second_last: Option<ScrambleMove>,
) -> bool {
    let Some(last) = last else {
        return true;
    };
    // no immediate repeat of a base face, wide or not
    if candidate.face == last.face {
        return false;
    }
    // no third consecutive move on one axis
    if let Some(second_last) = second_last {
        if candidate.face.axis() == last.face.axis()
            && last.face.axis() == second_last.face.axis()
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    fn base_faces(scramble: &str) -> Vec<crate::moves::Face> {
        scramble
            .split_whitespace()
            .map(|token| Move::parse(token).expect("generated token must parse").face)
            .collect()
    }

    #[test]
    fn test_scrambles_have_exact_target_length() {
        for kind in PuzzleKind::ALL {
            let scramble = generate_with(kind, &mut Rng::with_seed(7));
            assert_eq!(
                scramble.split_whitespace().count(),
                kind.scramble_length(),
                "{}",
                kind.display_name()
            );
        }
    }

    #[test]
    fn test_no_consecutive_moves_share_a_base_face() {
        for seed in 0..50 {
            let faces = base_faces(&generate_with(
                PuzzleKind::SevenBySeven,
                &mut Rng::with_seed(seed),
            ));
            for pair in faces.windows(2) {
                assert_ne!(pair[0], pair[1], "repeat base face (seed {seed})");
            }
        }
    }

    #[test]
    fn test_no_three_consecutive_moves_share_an_axis() {
        for seed in 0..50 {
            let faces = base_faces(&generate_with(
                PuzzleKind::ThreeByThree,
                &mut Rng::with_seed(seed),
            ));
            for triple in faces.windows(3) {
                assert!(
                    !(triple[0].axis() == triple[1].axis()
                        && triple[1].axis() == triple[2].axis()),
                    "three moves on one axis (seed {seed})"
                );
            }
        }
    }

    #[test]
    fn test_two_by_two_never_emits_restricted_faces() {
        use crate::moves::Face;
        for seed in 0..50 {
            let faces = base_faces(&generate_with(PuzzleKind::TwoByTwo, &mut Rng::with_seed(seed)));
            for face in faces {
                assert!(
                    matches!(face, Face::Right | Face::Up | Face::Front),
                    "2x2 scramble emitted {} (seed {seed})",
                    face.letter()
                );
            }
        }
    }

    #[test]
    fn test_wide_tokens_only_on_big_cubes() {
        let small = generate_with(PuzzleKind::ThreeByThree, &mut Rng::with_seed(3));
        assert!(!small.contains('w'));

        // with 100 tokens from a 12-move vocabulary a wide move is all but
        // guaranteed; a seed that produced none would be worth a look
        let big = generate_with(PuzzleKind::SevenBySeven, &mut Rng::with_seed(3));
        assert!(big.contains('w'));
    }

    #[test]
    fn test_same_seed_reproduces_the_scramble() {
        for kind in PuzzleKind::ALL {
            let a = generate_with(kind, &mut Rng::with_seed(99));
            let b = generate_with(kind, &mut Rng::with_seed(99));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_generated_scrambles_apply_cleanly() {
        use crate::cube::CubeState;
        for kind in PuzzleKind::ALL {
            let scramble = generate_with(kind, &mut Rng::with_seed(11));
            let mut state = CubeState::solved(kind.size());
            let solved = state.clone();
            state.apply_sequence(&scramble);
            assert_ne!(state, solved, "{} scramble was a no-op", kind.display_name());
        }
    }
}
