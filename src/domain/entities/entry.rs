use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One catalog item as it appears in the data source.
///
/// Text fields are taken as they come: missing or `null` becomes an empty
/// string and scalars keep their JSON text, so one odd record still renders
/// instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(rename = "nome", alias = "name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(
        rename = "categoria",
        alias = "category",
        default,
        deserialize_with = "lenient_text"
    )]
    pub category: String,
    #[serde(
        rename = "descricao",
        alias = "description",
        default,
        deserialize_with = "lenient_text"
    )]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: String,
    #[serde(alias = "logoUrl", default, deserialize_with = "lenient_optional_text")]
    logo_url: Option<String>,
}

impl Entry {
    /// An empty `logo_url` counts as absent.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn logo_alt_text(&self) -> String {
        format!("Logo {}", self.name)
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

#[cfg(test)]
impl Entry {
    pub fn new(name: String, category: String, description: String, link: String) -> Self {
        Self {
            name,
            category,
            description,
            link,
            logo_url: None,
        }
    }

    pub fn with_logo_url(mut self, logo_url: String) -> Self {
        self.logo_url = Some(logo_url);
        self
    }
}
