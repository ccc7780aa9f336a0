use serde::Serialize;

/// Display structure produced from a `SearchResult`
///
/// Every value slot is already filled: missing data carries the localized
/// placeholder, so formatters never see a blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderedView {
    Geolocation { query: String, rows: Vec<DisplayRow> },
    Records { blocks: Vec<RecordBlock> },
    Message { tone: Tone, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

impl DisplayRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordBlock {
    pub source: String,
    pub lines: Vec<TreeLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub marker: TreeMarker,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeMarker {
    Branch,
    Last,
}

impl TreeMarker {
    pub fn symbol(self) -> &'static str {
        match self {
            TreeMarker::Branch => "├",
            TreeMarker::Last => "└",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    /// Well-formed query, nothing found
    Notice,
    Error,
}
