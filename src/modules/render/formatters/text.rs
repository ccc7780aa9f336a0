use crate::modules::render::domain::{RenderedView, Tone};
use colored::{ColoredString, Colorize};

/// Terminal rendering of a `RenderedView`
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, view: &RenderedView) -> String {
        match view {
            RenderedView::Geolocation { query, rows } => {
                let width = rows
                    .iter()
                    .map(|row| row.label.chars().count() + 1)
                    .max()
                    .unwrap_or(0);

                let header = format!("🌐 {}", query);
                let mut out = vec![self.paint(&header, |s| s.green().bold())];
                for row in rows {
                    let label = format!("{:<width$}", format!("{}:", row.label), width = width);
                    out.push(format!("  {} {}", self.paint(&label, |s| s.cyan()), row.value));
                }
                out.join("\n")
            }
            RenderedView::Records { blocks } => blocks
                .iter()
                .map(|block| {
                    let header = format!("📊 {}", block.source);
                    let mut out = vec![self.paint(&header, |s| s.green().bold())];
                    for line in &block.lines {
                        out.push(format!(
                            "{} {} {}",
                            line.marker.symbol(),
                            self.paint(&format!("{}:", line.key), |s| s.cyan()),
                            line.value
                        ));
                    }
                    out.join("\n")
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
            RenderedView::Message { tone, text } => self.message(*tone, text),
        }
    }

    /// A one-line status message (auth replies, notices)
    pub fn message(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Success => self.paint(&format!("✓ {}", text), |s| s.green()),
            Tone::Notice => self.paint(&format!("• {}", text), |s| s.yellow()),
            Tone::Error => self.paint(&format!("✗ {}", text), |s| s.red().bold()),
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::render::domain::{DisplayRow, RecordBlock, TreeLine, TreeMarker};

    #[test]
    fn test_geolocation_labels_are_aligned() {
        let view = RenderedView::Geolocation {
            query: "8.8.8.8".into(),
            rows: vec![
                DisplayRow::new("City", "Ashburn"),
                DisplayRow::new("Timezone", "not specified"),
            ],
        };

        let text = TextFormatter::new(false).format(&view);
        assert_eq!(
            text,
            "🌐 8.8.8.8\n  City:     Ashburn\n  Timezone: not specified"
        );
    }

    #[test]
    fn test_record_blocks_are_trees() {
        let view = RenderedView::Records {
            blocks: vec![RecordBlock {
                source: "Leak 2021".into(),
                lines: vec![
                    TreeLine {
                        marker: TreeMarker::Branch,
                        key: "name".into(),
                        value: "Ivan".into(),
                    },
                    TreeLine {
                        marker: TreeMarker::Last,
                        key: "age".into(),
                        value: "42".into(),
                    },
                ],
            }],
        };

        let text = TextFormatter::new(false).format(&view);
        assert_eq!(text, "📊 Leak 2021\n├ name: Ivan\n└ age: 42");
    }

    #[test]
    fn test_messages_are_marked_by_tone() {
        let formatter = TextFormatter::new(false);
        assert_eq!(
            formatter.message(Tone::Error, "Authorization required"),
            "✗ Authorization required"
        );
        assert_eq!(
            formatter.message(Tone::Notice, "Nothing found"),
            "• Nothing found"
        );
    }
}
