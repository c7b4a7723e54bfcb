use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class of a dashboard row. Fixed set, never an arbitrary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Currency,
    Crypto,
    Equity,
    Commodity,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Currency,
        Category::Crypto,
        Category::Equity,
        Category::Commodity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Crypto => "crypto",
            Category::Equity => "equity",
            Category::Commodity => "commodity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized data point flowing through the pipeline. Immutable once
/// constructed; filtering selects rows, it never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    pub value: f64,
    pub category: Category,
}

impl Row {
    pub fn new(name: impl Into<String>, value: f64, category: Category) -> Self {
        Row {
            name: name.into(),
            value,
            category,
        }
    }
}
