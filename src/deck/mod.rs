//! In-memory slide deck
//!
//! Holds the state the editor manipulates: slides, their text boxes and
//! at most one chart per slide. Decks load from and save to the editor's
//! JSON export format.

pub mod error;
pub mod model;

pub use error::DeckError;
pub use model::{Deck, Slide, TextBox, TextStyle, MAX_FONT_SIZE, MIN_FONT_SIZE};
