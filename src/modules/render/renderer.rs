use super::domain::{DisplayRow, RecordBlock, RenderedView, Tone, TreeLine, TreeMarker};
use crate::modules::search::domain::{IpResult, SearchResult, SourceRecord};
use crate::shared::domain::value_objects::{Locale, Message};

/// Map a result to its display structure. Pure; the same input always gives
/// the same view.
pub fn render(result: &SearchResult, locale: Locale) -> RenderedView {
    match result {
        SearchResult::Ip(ip) => RenderedView::Geolocation {
            query: ip.query.clone(),
            rows: geolocation_rows(ip, locale),
        },
        SearchResult::Records(list) => RenderedView::Records {
            blocks: list
                .records
                .iter()
                .map(|record| record_block(record, locale))
                .collect(),
        },
        SearchResult::Empty => RenderedView::Message {
            tone: Tone::Notice,
            text: locale.text(Message::NothingFound).to_string(),
        },
        SearchResult::Error(err) => {
            let text = if err.message.trim().is_empty() {
                err.kind.as_str().to_string()
            } else {
                err.message.clone()
            };
            RenderedView::Message {
                tone: Tone::Error,
                text,
            }
        }
    }
}

fn geolocation_rows(ip: &IpResult, locale: Locale) -> Vec<DisplayRow> {
    let placeholder = locale.text(Message::NotSpecified);
    let coordinates = ip
        .coordinates()
        .map(|(lat, lon)| format!("{}, {}", lat, lon))
        .unwrap_or_else(|| placeholder.to_string());

    vec![
        DisplayRow::new(locale.text(Message::Country), or_placeholder(&ip.country, placeholder)),
        DisplayRow::new(locale.text(Message::Region), or_placeholder(&ip.region, placeholder)),
        DisplayRow::new(locale.text(Message::City), or_placeholder(&ip.city, placeholder)),
        DisplayRow::new(locale.text(Message::Isp), or_placeholder(&ip.isp, placeholder)),
        DisplayRow::new(locale.text(Message::Coordinates), coordinates),
        DisplayRow::new(locale.text(Message::Timezone), or_placeholder(&ip.timezone, placeholder)),
    ]
}

fn record_block(record: &SourceRecord, locale: Locale) -> RecordBlock {
    let placeholder = locale.text(Message::NotSpecified);
    let last = record.fields.len().saturating_sub(1);

    let lines = record
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| TreeLine {
            marker: if index == last {
                TreeMarker::Last
            } else {
                TreeMarker::Branch
            },
            key: field.key.clone(),
            value: or_placeholder(&field.value, placeholder),
        })
        .collect();

    RecordBlock {
        source: or_placeholder(&record.source_label, locale.text(Message::UnknownSource)),
        lines,
    }
}

fn or_placeholder(value: &Option<String>, placeholder: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::domain::{FailureKind, IpResult, RecordField, RecordListResult};

    #[test]
    fn test_bare_ip_result_fills_every_row_with_placeholder() {
        let view = render(&SearchResult::Ip(IpResult::new("1.2.3.4")), Locale::En);

        let RenderedView::Geolocation { query, rows } = view else {
            panic!("expected geolocation view");
        };
        assert_eq!(query, "1.2.3.4");
        assert_eq!(rows.len(), 6);
        for row in rows {
            assert_eq!(row.value, "not specified", "row {}", row.label);
        }
    }

    #[test]
    fn test_ip_rows_have_fixed_order() {
        let ip = IpResult {
            query: "8.8.8.8".into(),
            country: Some("США".into()),
            region: Some("Вирджиния".into()),
            city: Some("Ашберн".into()),
            isp: Some("Google LLC".into()),
            lat: Some(39.03),
            lon: Some(-77.5),
            timezone: Some("America/New_York".into()),
        };
        let RenderedView::Geolocation { rows, .. } = render(&SearchResult::Ip(ip), Locale::Ru)
        else {
            panic!("expected geolocation view");
        };

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Страна", "Регион", "Город", "Провайдер", "Координаты", "Часовой пояс"]
        );
        assert_eq!(rows[4].value, "39.03, -77.5");
    }

    #[test]
    fn test_half_coordinates_render_placeholder() {
        let mut ip = IpResult::new("1.2.3.4");
        ip.lat = Some(55.75);
        let RenderedView::Geolocation { rows, .. } = render(&SearchResult::Ip(ip), Locale::Ru)
        else {
            panic!("expected geolocation view");
        };
        assert_eq!(rows[4].value, "Не указано");
    }

    #[test]
    fn test_records_use_tree_markers() {
        let records = RecordListResult::new(vec![SourceRecord::new(
            Some("Leak 2021".into()),
            vec![
                RecordField::new("name", Some("Ivan".into())),
                RecordField::new("city", None),
                RecordField::new("age", Some("42".into())),
            ],
        )]);

        let view = render(&SearchResult::Records(records), Locale::En);
        let RenderedView::Records { blocks } = view else {
            panic!("expected records view");
        };

        assert_eq!(blocks[0].source, "Leak 2021");
        let markers: Vec<TreeMarker> = blocks[0].lines.iter().map(|l| l.marker).collect();
        assert_eq!(
            markers,
            vec![TreeMarker::Branch, TreeMarker::Branch, TreeMarker::Last]
        );
        assert_eq!(blocks[0].lines[1].value, "not specified");
    }

    #[test]
    fn test_single_field_record_is_last() {
        let records = RecordListResult::new(vec![SourceRecord::new(
            None,
            vec![RecordField::new("login", Some("ivan".into()))],
        )]);

        let RenderedView::Records { blocks } = render(&SearchResult::Records(records), Locale::En)
        else {
            panic!("expected records view");
        };
        assert_eq!(blocks[0].source, "Unknown source");
        assert_eq!(blocks[0].lines[0].marker, TreeMarker::Last);
    }

    #[test]
    fn test_empty_result_is_a_notice_not_an_error() {
        let view = render(&SearchResult::Empty, Locale::En);
        assert_eq!(
            view,
            RenderedView::Message {
                tone: Tone::Notice,
                text: "Nothing found".into()
            }
        );
    }

    #[test]
    fn test_error_result_is_single_error_line() {
        let view = render(
            &SearchResult::error(FailureKind::Backend, "Пустой запрос"),
            Locale::En,
        );
        assert_eq!(
            view,
            RenderedView::Message {
                tone: Tone::Error,
                text: "Пустой запрос".into()
            }
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let result = SearchResult::Ip(IpResult::new("1.2.3.4"));
        assert_eq!(render(&result, Locale::En), render(&result, Locale::En));
    }
}
