//! Record repositories.
//!
//! Each module adds methods to `LectorDb` via `impl LectorDb` blocks;
//! `repository` exposes them through the `Repository` trait.

pub mod graded_answer;
pub mod question_set;
mod repository;
