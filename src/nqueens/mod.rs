//! N-Queens as a [`GaProblem`](crate::ga::GaProblem).
//!
//! A member stores one column index per row. Fitness is the number of
//! colliding queen pairs (same column or same diagonal); zero is a
//! solution.
//!
//! ```
//! use u_apriori_ga::nqueens::collisions;
//!
//! assert_eq!(collisions(&[0, 1, 2, 3]), 6);
//! assert_eq!(collisions(&[1, 3, 0, 2]), 0);
//! ```

mod board;
mod problem;

pub use board::{collisions, is_collision, render_board, Board};
pub use problem::{Initialization, NQueensProblem};
