use crate::modules::render::contacts::ContactSummary;
use crate::modules::render::domain::RenderedView;
use crate::modules::search::domain::Submission;
use crate::shared::domain::value_objects::{Locale, Message};
use crate::shared::errors::AppResult;
use minijinja::{context, Environment};
use serde::Serialize;

// The `.html` suffix turns on minijinja's HTML auto-escaping
const TEMPLATE_NAME: &str = "report.html";
const HTML_TEMPLATE: &str = include_str!("../templates/report.html.jinja");

/// Values the report template needs besides the view itself
#[derive(Debug, Serialize)]
pub struct ReportContext<'a> {
    pub lang: String,
    pub title: &'static str,
    pub query: &'a str,
    pub category: String,
    pub submitted_at: String,
    pub record_count: usize,
    pub query_label: &'static str,
    pub time_label: &'static str,
    pub records_label: &'static str,
    pub contacts: ContactSummary,
    pub labels: SummaryLabels,
}

/// Headings of the summary cards and panels
#[derive(Debug, Serialize)]
pub struct SummaryLabels {
    pub information: &'static str,
    pub total_records: &'static str,
    pub names: &'static str,
    pub phones: &'static str,
    pub emails: &'static str,
    pub no_names: &'static str,
    pub no_phones: &'static str,
    pub no_emails: &'static str,
}

impl SummaryLabels {
    fn new(locale: Locale) -> Self {
        Self {
            information: locale.text(Message::Information),
            total_records: locale.text(Message::TotalRecords),
            names: locale.text(Message::Names),
            phones: locale.text(Message::Phones),
            emails: locale.text(Message::Emails),
            no_names: locale.text(Message::NoNames),
            no_phones: locale.text(Message::NoPhones),
            no_emails: locale.text(Message::NoEmails),
        }
    }
}

impl<'a> ReportContext<'a> {
    pub fn new(submission: &'a Submission, view: &RenderedView, locale: Locale) -> Self {
        let record_count = match view {
            RenderedView::Records { blocks } => blocks.len(),
            RenderedView::Geolocation { .. } => 1,
            RenderedView::Message { .. } => 0,
        };

        Self {
            lang: locale.to_string(),
            title: locale.text(Message::ReportTitle),
            query: &submission.query,
            category: submission.category.to_string(),
            submitted_at: submission
                .submitted_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            record_count,
            query_label: locale.text(Message::Query),
            time_label: locale.text(Message::Time),
            records_label: locale.text(Message::RecordsFound),
            contacts: ContactSummary::from_result(&submission.result, locale),
            labels: SummaryLabels::new(locale),
        }
    }
}

/// Standalone HTML report for one submission
pub struct HtmlFormatter {
    env: Environment<'static>,
}

impl HtmlFormatter {
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, HTML_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn format(&self, report: &ReportContext<'_>, view: &RenderedView) -> AppResult<String> {
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let html = template.render(context! { report, view })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::query::QueryCategory;
    use crate::modules::render::domain::{RecordBlock, Tone, TreeLine, TreeMarker};
    use crate::modules::render::renderer::render;
    use crate::modules::search::domain::{
        RecordField, RecordListResult, SearchResult, SourceRecord,
    };
    use chrono::Utc;

    fn submission(query: &str) -> Submission {
        Submission {
            id: 1,
            query: query.to_string(),
            category: QueryCategory::Email,
            submitted_at: Utc::now(),
            result: SearchResult::Empty,
        }
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let formatter = HtmlFormatter::new().unwrap();
        let submission = submission("user@example.com");
        let view = RenderedView::Records {
            blocks: vec![RecordBlock {
                source: "<b>Leak</b>".into(),
                lines: vec![TreeLine {
                    marker: TreeMarker::Last,
                    key: "note".into(),
                    value: "<script>alert(1)</script>".into(),
                }],
            }],
        };

        let html = formatter
            .format(&ReportContext::new(&submission, &view, Locale::En), &view)
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        // minijinja also escapes `/`
        assert!(html.contains("&lt;b&gt;Leak&lt;&#x2f;b&gt;"));
        assert!(html.contains("└"));
    }

    #[test]
    fn test_message_view_carries_tone_class() {
        let formatter = HtmlFormatter::new().unwrap();
        let submission = submission("user@example.com");
        let view = RenderedView::Message {
            tone: Tone::Notice,
            text: "Nothing found".into(),
        };

        let html = formatter
            .format(&ReportContext::new(&submission, &view, Locale::En), &view)
            .unwrap();

        assert!(html.contains(r#"class="message notice""#));
        assert!(html.contains("Nothing found"));
        assert!(html.contains("user@example.com"));
    }

    #[test]
    fn test_contact_summary_panels() {
        let formatter = HtmlFormatter::new().unwrap();
        let mut submission = submission("+79161112233");
        submission.result = SearchResult::Records(RecordListResult::new(vec![SourceRecord::new(
            Some("Leak 2021".into()),
            vec![
                RecordField::new("name", Some("Ivan".into())),
                RecordField::new("phone", Some("+7 (916) 111-22-33".into())),
            ],
        )]));
        let view = render(&submission.result, Locale::En);

        let html = formatter
            .format(&ReportContext::new(&submission, &view, Locale::En), &view)
            .unwrap();

        assert!(html.contains(r#"<div class="stat-number" id="nameCount">1</div>"#));
        assert!(html.contains(r#"<div class="stat-number" id="phoneCount">1</div>"#));
        assert!(html.contains(r#"<div class="stat-number" id="emailCount">0</div>"#));
        assert!(html.contains("+7 916 111-22-33"));
        assert!(html.contains("MTS"));
        assert!(html.contains("name: Ivan"));
        assert!(html.contains("No emails found"));
    }
}
