use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of identifier a query looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCategory {
    Ip,
    Phone,
    Email,
    Unrecognized,
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryCategory::Ip => "ip",
            QueryCategory::Phone => "phone",
            QueryCategory::Email => "email",
            QueryCategory::Unrecognized => "unrecognized",
        };
        write!(f, "{}", name)
    }
}
