mod html;
mod text;

pub use html::{HtmlFormatter, ReportContext};
pub use text::TextFormatter;
