use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ApnsError, Result};

/// APNs environment (selects the gateway host).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Production => "api.push.apple.com",
            Environment::Sandbox => "api.sandbox.push.apple.com",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Sandbox
    }
}

/// Value for the `apns-push-type` header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PushType {
    Alert,
    Background,
    Location,
    Voip,
    Complication,
    Fileprovider,
    Mdm,
    Liveactivity,
    Pushtotalk,
}

impl PushType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushType::Alert => "alert",
            PushType::Background => "background",
            PushType::Location => "location",
            PushType::Voip => "voip",
            PushType::Complication => "complication",
            PushType::Fileprovider => "fileprovider",
            PushType::Mdm => "mdm",
            PushType::Liveactivity => "liveactivity",
            PushType::Pushtotalk => "pushtotalk",
        }
    }
}

impl Default for PushType {
    fn default() -> Self {
        PushType::Alert
    }
}

/// A single APNs notification: provider credentials, target device and
/// notification content.
///
/// Credentials are the token-based kind: an ES256 auth key downloaded from
/// the Apple developer portal (PKCS#8 PEM, `AuthKey_XXXXXXXXXX.p8`) plus the
/// key ID and team ID it belongs to.
#[derive(Debug, Clone)]
pub struct ApnsNotification {
    /// 10-character key ID from the developer portal.
    pub key_id: String,
    /// 10-character Apple team ID.
    pub team_id: String,
    /// App bundle ID, sent as `apns-topic`.
    pub bundle_id: String,
    /// Contents of the `.p8` auth key file (PEM).
    pub private_key: String,
    /// Hex device token registered by the app.
    pub device_token: String,
    pub alert_title: String,
    pub alert_body: String,
    /// Extra top-level payload keys, delivered to the app alongside `aps`.
    pub custom_values: IndexMap<String, Value>,
    pub push_type: PushType,
    pub environment: Environment,
    /// `apns-priority`: 10 for immediate delivery, 5 for power-friendly.
    pub priority: u32,
    /// `apns-expiration` as a unix timestamp. 0 means deliver once, now.
    pub expiration: i64,
    pub collapse_id: Option<String>,
    /// Extra request headers, sent after the standard set.
    pub custom_headers: IndexMap<String, String>,
}

impl ApnsNotification {
    pub fn new(key_id: String, team_id: String, bundle_id: String, private_key: String) -> Self {
        Self {
            key_id,
            team_id,
            bundle_id,
            private_key,
            device_token: String::new(),
            alert_title: String::new(),
            alert_body: String::new(),
            custom_values: IndexMap::new(),
            push_type: PushType::default(),
            environment: Environment::default(),
            priority: 10,
            expiration: 0,
            collapse_id: None,
            custom_headers: IndexMap::new(),
        }
    }

    pub fn with_device_token(mut self, device_token: String) -> Self {
        self.device_token = device_token;
        self
    }

    pub fn with_alert(mut self, title: String, body: String) -> Self {
        self.alert_title = title;
        self.alert_body = body;
        self
    }

    /// Adds a top-level payload key. Re-adding an existing key replaces its
    /// value but keeps the original position.
    pub fn with_custom_value(mut self, key: String, value: Value) -> Self {
        self.custom_values.insert(key, value);
        self
    }

    pub fn with_push_type(mut self, push_type: PushType) -> Self {
        self.push_type = push_type;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_expiration(mut self, expiration: i64) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_collapse_id(mut self, collapse_id: String) -> Self {
        self.collapse_id = Some(collapse_id);
        self
    }

    pub fn with_custom_header(mut self, name: String, value: String) -> Self {
        self.custom_headers.insert(name, value);
        self
    }

    /// Full request URL for this notification's device and environment.
    pub fn request_url(&self) -> String {
        format!(
            "https://{}/3/device/{}",
            self.environment.endpoint(),
            self.device_token
        )
    }

    /// Checks that every field required to build and authorize the request
    /// is present. Runs before signing so a misconfigured notification never
    /// reaches the network.
    pub fn validate(&self) -> Result<()> {
        if self.key_id.is_empty() {
            return Err(ApnsError::MissingField("key_id"));
        }
        if self.team_id.is_empty() {
            return Err(ApnsError::MissingField("team_id"));
        }
        if self.bundle_id.is_empty() {
            return Err(ApnsError::MissingField("bundle_id"));
        }
        if self.private_key.is_empty() {
            return Err(ApnsError::MissingField("private_key"));
        }
        if self.device_token.is_empty() {
            return Err(ApnsError::MissingField("device_token"));
        }
        Ok(())
    }
}
