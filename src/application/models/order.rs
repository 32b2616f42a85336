/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 13/5/25
 ******************************************************************************/
use crate::presentation::serialization::{option_u32_or_string, string_or_number};
use serde::{Deserialize, Serialize};

/// Sort direction of the order listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filter and paging for `get-order.php`
///
/// The provider documents `date`, `keyword`, `username` and `operator`
/// filters but currently ignores them; they are forwarded when set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    /// First page, 1-based
    pub index: u32,
    /// Orders per page
    pub count: u32,
    pub order: SortOrder,
    /// Air date
    pub date: Option<String>,
    pub keyword: Option<String>,
    pub username: Option<String>,
    pub operator: Option<String>,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            index: 1,
            count: 15,
            order: SortOrder::Desc,
            date: None,
            keyword: None,
            username: None,
            operator: None,
        }
    }
}

impl OrderQuery {
    pub(crate) fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("index".to_string(), self.index.to_string()),
            ("count".to_string(), self.count.to_string()),
            ("order".to_string(), self.order.as_str().to_string()),
        ];
        let optional = [
            ("date", &self.date),
            ("keyword", &self.keyword),
            ("username", &self.username),
            ("operator", &self.operator),
        ];
        for (key, value) in optional {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                fields.push((key.to_string(), value.clone()));
            }
        }
        fields
    }
}

/// One page of the order listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "option_u32_or_string")]
    pub index: Option<u32>,
    #[serde(default, deserialize_with = "option_u32_or_string")]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "option_u32_or_string")]
    pub count_in_list: Option<u32>,
    #[serde(default)]
    pub reservations: Vec<Order>,
}

/// A past booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "string_or_number")]
    pub orderid: String,
    #[serde(deserialize_with = "string_or_number")]
    pub resid: String,
    pub service: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    /// `2023-05-07 23:15`
    pub starttime: String,
    #[serde(deserialize_with = "string_or_number")]
    pub duration: String,
    /// When the order was first placed
    pub reservetime: String,
    /// Download link, once the recording is shared
    #[serde(default)]
    pub sharelink: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
}
