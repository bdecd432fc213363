//! Vector scene produced by the chart geometry
//!
//! A [`Scene`] is a flat list of drawing primitives in the coordinate
//! system of the requested render box. It carries no rendering backend
//! details; the SVG writer in [`crate::renderer`] is one consumer.

pub mod path;
pub mod types;

pub use path::PathSegment;
pub use types::{Point, Primitive, Scene, ViewBox};
