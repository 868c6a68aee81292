use crate::domain::{AttributeValue, Capability};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetails {
    pub id: String,
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub attributes: Vec<DeviceAttribute>,
    #[serde(default, deserialize_with = "capabilities")]
    pub capabilities: Vec<Capability>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttribute {
    pub name: String,
    pub current_value: Option<AttributeValue>,
}

// The Maker API interleaves capability names with objects describing their
// attributes. Only the names matter here; unsupported names are skipped so a
// new hub firmware cannot break deserialization.
fn capabilities<'de, D>(deserializer: D) -> Result<Vec<Capability>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;

    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(name) => match serde_json::from_value::<Capability>(Value::String(name.clone())) {
                Ok(capability) => Some(capability),
                Err(_) => {
                    debug!("Skipping unsupported capability '{}'", name);
                    None
                }
            },
            _ => None,
        })
        .collect())
}
