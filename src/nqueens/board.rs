//! Board representation, collision counting and rendering.

use crate::ga::Individual;

/// One candidate placement: `queens[row]` is the column of that row's queen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub queens: Vec<usize>,
    pub fitness: u32,
}

impl Board {
    /// Wraps a placement with an unevaluated fitness.
    pub fn new(queens: Vec<usize>) -> Self {
        Self {
            queens,
            fitness: u32::MAX,
        }
    }

    /// Board size.
    pub fn n(&self) -> usize {
        self.queens.len()
    }
}

impl Individual for Board {
    type Fitness = u32;

    fn fitness(&self) -> u32 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: u32) {
        self.fitness = fitness;
    }
}

/// Returns `true` if two `(row, column)` squares attack each other along a
/// column or a diagonal.
///
/// Same-row pairs are never compared by [`collisions`].
pub fn is_collision(a: (usize, usize), b: (usize, usize)) -> bool {
    a.1 == b.1 || a.0.abs_diff(b.0) == a.1.abs_diff(b.1)
}

/// Counts colliding queen pairs over all rows `j < k`.
pub fn collisions(queens: &[usize]) -> u32 {
    let mut count = 0;
    for j in 0..queens.len() {
        for k in (j + 1)..queens.len() {
            if is_collision((j, queens[j]), (k, queens[k])) {
                count += 1;
            }
        }
    }
    count
}

/// Renders a placement as an N×N grid: `Q` on the chosen column, `.`
/// elsewhere, cells separated by a space, one row per line.
pub fn render_board(queens: &[usize]) -> String {
    let n = queens.len();
    let mut out = String::with_capacity(n * (2 * n + 1));
    for &col in queens {
        let row: Vec<&str> = (0..n).map(|c| if c == col { "Q" } else { "." }).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
