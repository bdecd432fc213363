//! Error types for deck operations

use thiserror::Error;

use crate::error::SourceError;

/// Errors that can occur while loading or editing a deck
#[derive(Debug, Error)]
pub enum DeckError {
    /// Deck file could not be read
    #[error("failed to read deck: {0}")]
    Io(#[from] std::io::Error),

    /// Deck JSON could not be decoded
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Slide index outside the deck
    #[error("slide {index} does not exist (deck has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// Text box id not present on the slide
    #[error("text box {id} not found on slide {slide}")]
    TextNotFound { slide: usize, id: u64 },

    /// A deck always keeps at least one slide
    #[error("cannot delete the last slide")]
    LastSlide,

    /// No id above the largest one in use is left to issue
    #[error("no unused slide or text box ids remain")]
    IdsExhausted,
}

impl DeckError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::SlideOutOfRange { index, len }
    }

    /// Format the error, with source context for decoding errors
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            DeckError::Source(e) => e.format(source, filename),
            other => other.to_string(),
        }
    }
}
