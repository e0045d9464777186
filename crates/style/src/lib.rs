pub mod font;
pub mod options;
pub mod page;
pub mod template;
pub mod text;
pub mod units;

pub use font::{FontFamily, FontWeight, StandardFont};
pub use options::{resolve_options, ExportOptions, ExportOverrides, OptionsError};
pub use page::PageGeometry;
pub use template::{SectionKind, SectionLayout, SectionPlan, TemplateConfig, TemplateId};
pub use text::TextAlign;
