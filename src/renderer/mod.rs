//! SVG renderer for chart scenes
//!
//! This module takes a [`Scene`](crate::scene::Scene) and produces an SVG
//! string with CSS classes on every primitive for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{escape_xml, render_svg};
