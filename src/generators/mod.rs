use rand::{SeedableRng, rngs::StdRng};

mod dsu;
mod kruskal;

pub use kruskal::generate;

use crate::maze::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect `rows` x `cols` maze, seeded for reproducibility when
/// `seed` is given. See [`generate`] for the algorithm and its preconditions.
pub fn generate_maze(rows: u16, cols: u16, seed: Option<u64>) -> Grid {
    generate(rows, cols, &mut get_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_maze_seeded_is_deterministic() {
        let first = generate_maze(7, 9, Some(5));
        let second = generate_maze(7, 9, Some(5));
        for row in 0..7 {
            for col in 0..9 {
                assert_eq!(first[(row, col)].wall, second[(row, col)].wall);
            }
        }
    }
}
