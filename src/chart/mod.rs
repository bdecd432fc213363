//! Chart value objects
//!
//! A [`Chart`] is what the editor stores on a slide: a chart kind, the
//! numeric series and its labels. Charts are validated before geometry is
//! computed so that malformed data never reaches the drawing math.

pub mod error;
pub mod form;
pub mod model;

pub use error::{ChartError, FormError};
pub use form::ChartForm;
pub use model::{Chart, ChartKind};
