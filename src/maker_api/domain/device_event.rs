use crate::domain::AttributeValue;
use serde::Deserialize;

/// A device event as POSTed by the Maker API app.
#[derive(Debug, Deserialize, PartialEq)]
pub struct DeviceEvent {
    pub content: DeviceEventContent,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceEventContent {
    pub device_id: String,
    pub name: String,
    pub value: Option<AttributeValue>,
    pub display_name: Option<String>,
    pub description_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_a_pushed_event() -> Result<(), serde_json::Error> {
        let json = r#"{
            "content": {
                "name": "contact",
                "value": "open",
                "displayName": "Front Door",
                "deviceId": "130",
                "descriptionText": "Front Door was opened",
                "unit": null,
                "type": null,
                "data": null
            }
        }"#;

        let event: DeviceEvent = serde_json::from_str(json)?;

        assert_eq!(
            event,
            DeviceEvent {
                content: DeviceEventContent {
                    device_id: "130".to_string(),
                    name: "contact".to_string(),
                    value: Some(AttributeValue::Str("open".to_string())),
                    display_name: Some("Front Door".to_string()),
                    description_text: Some("Front Door was opened".to_string()),
                }
            }
        );
        Ok(())
    }
}
