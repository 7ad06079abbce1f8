//! Mini-Games
//!
//! Headless logic for the three library mini-games. Each game is a small
//! state machine the UI layer drives; trust effects are applied to the
//! shared [`GameProgress`] as outcomes happen.
//!
//! [`GameProgress`]: crate::game::state::GameProgress

pub mod book_sorting;
pub mod drawing;
pub mod hide_and_seek;

pub use book_sorting::{BookSorting, PlaceOutcome};
pub use drawing::DrawingGallery;
pub use hide_and_seek::{GuessOutcome, HideAndSeek};
