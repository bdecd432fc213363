//! Deck, slide and text box types

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::DeckError;
use crate::chart::Chart;
use crate::error::SourceError;

/// Smallest font size a text box accepts
pub const MIN_FONT_SIZE: u32 = 8;

/// Largest font size a text box accepts
pub const MAX_FONT_SIZE: u32 = 72;

const DEFAULT_FONT_SIZE: u32 = 16;
const NEW_TEXT: &str = "New Text";

fn default_title() -> String {
    "Presentation".to_string()
}

/// Character formatting of a text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl TextStyle {
    /// Clamp a font size into the accepted range
    pub fn clamp_font_size(size: i64) -> u32 {
        size.clamp(MIN_FONT_SIZE as i64, MAX_FONT_SIZE as i64) as u32
    }

    /// Parse a font size typed by the user from its leading integer ("24px" reads 24);
    /// input without leading digits becomes the minimum
    pub fn parse_font_size(input: &str) -> u32 {
        let input = input.trim_start();
        let (negative, rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return MIN_FONT_SIZE;
        }
        // Digit runs too long for i64 saturate before clamping
        let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
        Self::clamp_font_size(if negative { -magnitude } else { magnitude })
    }

    pub fn with_font_size(mut self, size: i64) -> Self {
        self.font_size = Self::clamp_font_size(size);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// A block of text on a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
}

/// One slide: text boxes in display order and an optional chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: u64,
    #[serde(default)]
    pub texts: Vec<TextBox>,
    #[serde(default)]
    pub chart: Option<Chart>,
}

impl Slide {
    fn blank(id: u64) -> Self {
        Self {
            id,
            texts: vec![],
            chart: None,
        }
    }

    pub fn text(&self, id: u64) -> Option<&TextBox> {
        self.texts.iter().find(|t| t.id == id)
    }

    fn text_mut(&mut self, id: u64) -> Option<&mut TextBox> {
        self.texts.iter_mut().find(|t| t.id == id)
    }
}

/// An ordered list of slides; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    slides: Vec<Slide>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A deck with one blank slide
    pub fn new() -> Self {
        Self {
            title: default_title(),
            slides: vec![Slide::blank(1)],
            next_id: 2,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// False for any deck built through `new` or `from_json`
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Result<&Slide, DeckError> {
        let len = self.slides.len();
        self.slides
            .get(index)
            .ok_or_else(|| DeckError::out_of_range(index, len))
    }

    fn slide_mut(&mut self, index: usize) -> Result<&mut Slide, DeckError> {
        let len = self.slides.len();
        self.slides
            .get_mut(index)
            .ok_or_else(|| DeckError::out_of_range(index, len))
    }

    fn issue_id(&mut self) -> Result<u64, DeckError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(DeckError::IdsExhausted)?;
        Ok(id)
    }

    /// Append a blank slide and return its index
    pub fn add_slide(&mut self) -> Result<usize, DeckError> {
        let id = self.issue_id()?;
        self.slides.push(Slide::blank(id));
        Ok(self.slides.len() - 1)
    }

    /// Remove a slide and return the index that should be selected next
    pub fn delete_slide(&mut self, index: usize) -> Result<usize, DeckError> {
        self.slide(index)?;
        if self.slides.len() == 1 {
            return Err(DeckError::LastSlide);
        }
        self.slides.remove(index);
        Ok(index.saturating_sub(1))
    }

    /// Add a default text box to a slide and return its id
    pub fn add_text(&mut self, slide: usize) -> Result<u64, DeckError> {
        self.slide(slide)?;
        let id = self.issue_id()?;
        self.slide_mut(slide)?.texts.push(TextBox {
            id,
            text: NEW_TEXT.to_string(),
            style: TextStyle::default(),
        });
        Ok(id)
    }

    /// Replace the content of a text box
    pub fn update_text(
        &mut self,
        slide: usize,
        id: u64,
        text: impl Into<String>,
    ) -> Result<(), DeckError> {
        let text_box = self
            .slide_mut(slide)?
            .text_mut(id)
            .ok_or(DeckError::TextNotFound { slide, id })?;
        text_box.text = text.into();
        Ok(())
    }

    /// Replace the style of a text box; the font size is clamped
    pub fn set_text_style(
        &mut self,
        slide: usize,
        id: u64,
        style: TextStyle,
    ) -> Result<(), DeckError> {
        let text_box = self
            .slide_mut(slide)?
            .text_mut(id)
            .ok_or(DeckError::TextNotFound { slide, id })?;
        text_box.style = TextStyle {
            font_size: TextStyle::clamp_font_size(style.font_size as i64),
            ..style
        };
        Ok(())
    }

    /// Put a chart on a slide, returning the chart it replaces
    pub fn set_chart(&mut self, slide: usize, chart: Chart) -> Result<Option<Chart>, DeckError> {
        Ok(self.slide_mut(slide)?.chart.replace(chart))
    }

    /// Take the chart off a slide
    pub fn remove_chart(&mut self, slide: usize) -> Result<Option<Chart>, DeckError> {
        Ok(self.slide_mut(slide)?.chart.take())
    }

    /// Load a deck from its JSON export
    pub fn from_json(source: &str) -> Result<Self, DeckError> {
        let mut deck: Deck =
            serde_json::from_str(source).map_err(|e| SourceError::from_json(&e, source))?;
        deck.normalize()?;
        Ok(deck)
    }

    /// Load a deck from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to the JSON export format
    pub fn to_json(&self) -> String {
        // Only strings, integers, bools and f64 inside
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Restore invariants after loading: at least one slide, fresh ids above existing ones
    fn normalize(&mut self) -> Result<(), DeckError> {
        let max_id = self.ids().max().unwrap_or(0);
        self.next_id = match max_id.checked_add(1) {
            Some(next) => next,
            None => {
                tracing::warn!("deck ids reach u64::MAX, renumbering");
                self.renumber()
            }
        };

        if self.slides.is_empty() {
            tracing::debug!("deck had no slides, adding a blank one");
            self.add_slide()?;
        }

        for slide in &mut self.slides {
            for text in &mut slide.texts {
                text.style.font_size = TextStyle::clamp_font_size(text.style.font_size as i64);
            }
        }
        Ok(())
    }

    fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.slides
            .iter()
            .flat_map(|s| std::iter::once(s.id).chain(s.texts.iter().map(|t| t.id)))
    }

    /// Reassign every id in document order starting at 1; returns the next free id
    fn renumber(&mut self) -> u64 {
        let mut next = 1;
        for slide in &mut self.slides {
            slide.id = next;
            next += 1;
            for text in &mut slide.texts {
                text.id = next;
                next += 1;
            }
        }
        next
    }
}
