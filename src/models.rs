use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A dish row as stored in the remote table.
///
/// `None` means the field was never given (a dismissed prompt) and goes over
/// the wire as `null`. Whatever else the service attaches to a row (keys,
/// timestamps) is kept in `extra` untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dish {
    pub fn new(title: Option<String>, ingredients: Option<String>) -> Self {
        Dish {
            title,
            ingredients,
            extra: Map::new(),
        }
    }

    /// Same title and ingredients, ignoring service-assigned fields
    pub fn same_fields(&self, other: &Dish) -> bool {
        self.title == other.title && self.ingredients == other.ingredients
    }

    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn ingredients_text(&self) -> &str {
        self.ingredients.as_deref().unwrap_or("")
    }
}

/// Credentials sent with every request to the table service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum AuthType {
    #[default]
    None,
    Bearer {
        token: String,
    },
    Basic {
        username: String,
        password: String,
    },
}
