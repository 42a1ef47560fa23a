//! Board model and game setup for a trivia board.
//!
//! The crate has no browser dependencies: the service is reached through
//! [`TriviaApi`], and the presentation layer consumes [`Grid`] and
//! [`RenderInstruction`] values.

pub use api::*;
pub use board::*;
pub use controller::*;
pub use error::*;
pub use fetcher::*;
pub use grid::*;
pub use types::*;

mod api;
mod board;
mod controller;
mod error;
mod fetcher;
mod grid;
#[cfg(test)]
mod testing;
mod types;

/// Columns on a board.
pub const NUM_CATEGORIES: usize = 6;

/// Rows on a board.
pub const NUM_CLUES_PER_CATEGORY: usize = 5;

/// Category summaries requested before sampling.
pub const CATEGORY_POOL_SIZE: usize = 100;
