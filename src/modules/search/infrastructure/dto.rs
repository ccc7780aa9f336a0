use serde_json::{Map, Value};
use tracing::debug;

/// Geolocation payload returned by `/search_ip` (ip-api.com field names)
///
/// Read field by field: a mistyped field is dropped on its own instead of
/// failing the whole reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpLookupDto {
    pub query: Option<String>,
    pub country: Option<String>,
    /// Human-readable region name (`regionName`)
    pub region_name: Option<String>,
    /// Region code, used when no name is given
    pub region: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
}

impl IpLookupDto {
    pub fn from_map(body: &Map<String, Value>) -> Self {
        Self {
            query: text(body, "query"),
            country: text(body, "country"),
            region_name: text(body, "regionName"),
            region: text(body, "region"),
            city: text(body, "city"),
            isp: text(body, "isp"),
            lat: number(body, "lat"),
            lon: number(body, "lon"),
            timezone: text(body, "timezone"),
        }
    }
}

fn text(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => {
            debug!("Ignoring non-text geolocation field {}: {}", key, other);
            None
        }
    }
}

// Numbers sent as strings are accepted
fn number(body: &Map<String, Value>, key: &str) -> Option<f64> {
    match body.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Null => None,
        other => {
            debug!("Ignoring non-numeric geolocation field {}: {}", key, other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(body: Value) -> IpLookupDto {
        let Value::Object(map) = body else {
            panic!("expected object");
        };
        IpLookupDto::from_map(&map)
    }

    #[test]
    fn test_reads_ip_api_field_names() {
        let parsed = dto(json!({"regionName": "Virginia", "region": "VA", "lat": 39.03}));
        assert_eq!(parsed.region_name.as_deref(), Some("Virginia"));
        assert_eq!(parsed.region.as_deref(), Some("VA"));
        assert_eq!(parsed.lat, Some(39.03));
    }

    #[test]
    fn test_bad_fields_become_none() {
        let parsed = dto(json!({
            "country": 7,
            "lat": "north",
            "lon": " -77.5 ",
            "city": "Ashburn"
        }));
        assert_eq!(parsed.country, None);
        assert_eq!(parsed.lat, None);
        assert_eq!(parsed.lon, Some(-77.5));
        assert_eq!(parsed.city.as_deref(), Some("Ashburn"));
    }
}
