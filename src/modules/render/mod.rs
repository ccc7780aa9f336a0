pub mod contacts;
pub mod domain;
pub mod formatters;
pub mod presenter;
pub mod renderer;

// Re-exports for easy external access
pub use contacts::{ContactSummary, PhoneContact};
pub use domain::{DisplayRow, RecordBlock, RenderedView, Tone, TreeLine, TreeMarker};
pub use formatters::{HtmlFormatter, TextFormatter};
pub use presenter::{OutputOptions, Presenter};
pub use renderer::render;
