use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApnsNotification;
use crate::errors::{ApnsError, Result};

/// Alert block inside the `aps` dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApsAlert {
    pub title: String,
    pub body: String,
}

/// The `aps` dictionary interpreted by the device OS.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Aps {
    pub alert: ApsAlert,
    pub sound: String,
    #[serde(rename = "content-available")]
    pub content_available: u8,
}

/// Serializes the notification body: the `aps` dictionary first, then every
/// custom value as a top-level sibling key in insertion order.
///
/// A custom value keyed `aps` overwrites the standard block while keeping
/// the first position. Callers own that collision.
pub fn encode_payload(notification: &ApnsNotification) -> Result<String> {
    let aps = Aps {
        alert: ApsAlert {
            title: notification.alert_title.clone(),
            body: notification.alert_body.clone(),
        },
        sound: "default".to_string(),
        content_available: 1,
    };

    let mut payload: IndexMap<String, Value> = IndexMap::new();
    payload.insert(
        "aps".to_string(),
        serde_json::to_value(&aps).map_err(|e| ApnsError::PayloadEncode(e.to_string()))?,
    );
    for (key, value) in &notification.custom_values {
        payload.insert(key.clone(), value.clone());
    }

    serde_json::to_string(&payload).map_err(|e| ApnsError::PayloadEncode(e.to_string()))
}
