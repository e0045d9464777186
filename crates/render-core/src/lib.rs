//! Core rendering abstractions shared by the PDF and Word backends.
//!
//! - `DocumentBackend`, the drawing capability section renderers target
//! - `Flow`, the cursor and column state every backend carries
//! - `Artifact` and the error type for rendering

pub mod constants;
mod error;
mod flow;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use flow::{ColumnFrame, Flow};
pub use traits::DocumentBackend;
pub use types::{web_href, Artifact, Card, Column, ContactItem, ContactKind, Row};
