use crate::modules::query::QueryCategory;
use std::fmt;

/// Backend search operations, one per searchable query category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchEndpoint {
    Ip,
    Phone,
    Email,
}

impl SearchEndpoint {
    pub const ALL: [SearchEndpoint; 3] = [
        SearchEndpoint::Ip,
        SearchEndpoint::Phone,
        SearchEndpoint::Email,
    ];

    pub fn for_category(category: QueryCategory) -> Option<Self> {
        match category {
            QueryCategory::Ip => Some(SearchEndpoint::Ip),
            QueryCategory::Phone => Some(SearchEndpoint::Phone),
            QueryCategory::Email => Some(SearchEndpoint::Email),
            QueryCategory::Unrecognized => None,
        }
    }

    pub fn category(self) -> QueryCategory {
        match self {
            SearchEndpoint::Ip => QueryCategory::Ip,
            SearchEndpoint::Phone => QueryCategory::Phone,
            SearchEndpoint::Email => QueryCategory::Email,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            SearchEndpoint::Ip => "/search_ip",
            SearchEndpoint::Phone => "/search_phone",
            SearchEndpoint::Email => "/search_email",
        }
    }

    /// Name of the single query-string parameter carrying the query
    pub fn param(self) -> &'static str {
        match self {
            SearchEndpoint::Ip => "ip",
            SearchEndpoint::Phone => "phone",
            SearchEndpoint::Email => "email",
        }
    }

    pub fn path_and_query(self, query: &str) -> String {
        format!(
            "{}?{}={}",
            self.path(),
            self.param(),
            urlencoding::encode(query)
        )
    }
}

impl fmt::Display for SearchEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_searchable_category_has_an_endpoint() {
        for endpoint in SearchEndpoint::ALL {
            assert_eq!(SearchEndpoint::for_category(endpoint.category()), Some(endpoint));
        }
        assert_eq!(SearchEndpoint::for_category(QueryCategory::Unrecognized), None);
    }

    #[test]
    fn test_path_and_query_encodes_value() {
        assert_eq!(
            SearchEndpoint::Phone.path_and_query("+7(999)123-45-67"),
            "/search_phone?phone=%2B7%28999%29123-45-67"
        );
        assert_eq!(
            SearchEndpoint::Email.path_and_query("user@example.com"),
            "/search_email?email=user%40example.com"
        );
        assert_eq!(
            SearchEndpoint::Ip.path_and_query("8.8.8.8"),
            "/search_ip?ip=8.8.8.8"
        );
    }
}
