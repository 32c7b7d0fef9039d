use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::time::Duration;

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A single external API service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    // Missing or null keys become empty strings so the validator reports them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl Service {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            url: url.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.id)
    }
}

/// Settings shared by every service of an integrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_url: String,
    /// Seconds. Zero or negative means no timeout.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeout: i64,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        u64::try_from(self.timeout)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// The aggregate of all configured services plus shared configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIntegrator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Config,
}

impl ServiceIntegrator {
    pub fn new(services: Vec<Service>, config: Config) -> Self {
        Self { services, config }
    }

    /// First service registered under `id`. Ids are not required to be unique.
    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}

/// One call to be made against a named service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceIntegration {
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,
    /// Pre-serialized payload, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Box<RawValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<ServiceIntegrationAuth>,
}

impl ServiceIntegration {
    pub fn body_str(&self) -> Option<&str> {
        self.body.as_deref().map(RawValue::get)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceIntegrationAuth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secret: String,
}
