//! Word-compatible HTML output for the resume layout engine.
//!
//! `HtmlBackend` emits one HTML fragment per drawing call and wraps them in
//! a complete document with print CSS when finalised. Word opens the result
//! as a `.doc`; page breaks are left to it.

mod backend;
mod css;
mod escape;

pub use backend::HtmlBackend;
pub use css::stylesheet;
pub use escape::{escape_attr, escape_text};
