use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One revenue entry: an amount earned on a date, attributed to clients and
/// a category.
///
/// `clients` and `comments` may be absent in the source file; absent fields
/// stay absent when a record is written back unchanged.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct Revenue {
    pub id: u64,
    pub source: String,
    pub amount: Decimal,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Revenue {
    /// The client a record is grouped under. Records without one are never
    /// squashed.
    pub fn primary_client(&self) -> Option<&str> {
        self.clients.first().map(String::as_str)
    }
}
