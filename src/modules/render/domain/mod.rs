mod view;

pub use view::{DisplayRow, RecordBlock, RenderedView, Tone, TreeLine, TreeMarker};
