use crate::domain::model::{Config, Service, ServiceIntegration, ServiceIntegrator};
use crate::utils::error::{IntegratorError, Result};
use crate::utils::validation::Validate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

const DEFAULT_METHOD: &str = "GET";

/// Everything needed to issue one integration call. Nothing here is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallPlan {
    pub service_id: String,
    pub method: String,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_scheme: Option<String>,
    pub has_body: bool,
}

impl CallPlan {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl ServiceIntegration {
    /// Absolute URL for this call: service root, then endpoint, then query
    /// pairs in key order.
    pub fn target_url(&self, service: &Service, config: &Config) -> Result<Url> {
        let mut url = service_root(service, config)?;

        // Query parameters belong in `query`, not the endpoint path.
        if self.endpoint.contains(&['?', '#'][..]) {
            return Err(IntegratorError::ConfigError {
                message: format!(
                    "endpoint '{}' must not contain '?' or '#'; use the query map",
                    self.endpoint
                ),
            });
        }

        let endpoint = self.endpoint.trim_start_matches('/');
        if !endpoint.is_empty() {
            let path = format!("{}/{}", url.path().trim_end_matches('/'), endpoint);
            url.set_path(&path);
        }

        if !self.query.is_empty() {
            let sorted: BTreeMap<_, _> = self.query.iter().collect();
            let mut pairs = url.query_pairs_mut();
            for (key, value) in sorted {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    pub fn normalized_method(&self) -> String {
        let method = self.method.trim();
        if method.is_empty() {
            DEFAULT_METHOD.to_string()
        } else {
            method.to_ascii_uppercase()
        }
    }
}

/// Parses the service URL, joining relative ones onto `config.base_url`.
fn service_root(service: &Service, config: &Config) -> Result<Url> {
    let url = match Url::parse(&service.url) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            if config.base_url.is_empty() {
                return Err(IntegratorError::ConfigError {
                    message: format!(
                        "service '{}' has relative url '{}' but config.base_url is empty",
                        service.id, service.url
                    ),
                });
            }
            let mut base = Url::parse(&config.base_url)?;
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            base.join(service.url.trim_start_matches('/'))?
        }
        Err(e) => return Err(e.into()),
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(IntegratorError::ConfigError {
            message: format!(
                "service '{}' uses unsupported URL scheme: {}",
                service.id, scheme
            ),
        }),
    }
}

/// Validates the integrator, then describes the call `integration` would make.
pub fn resolve(
    integrator: &ServiceIntegrator,
    integration: &ServiceIntegration,
) -> Result<CallPlan> {
    integrator.validate()?;

    let service = integrator
        .find_service(&integration.service_id)
        .ok_or_else(|| IntegratorError::UnknownService {
            service_id: integration.service_id.clone(),
        })?;

    let url = integration.target_url(service, &integrator.config)?;
    let method = integration.normalized_method();

    tracing::debug!(
        "Resolved {} {} for service '{}'",
        method,
        url,
        service.display_name()
    );

    Ok(CallPlan {
        service_id: service.id.clone(),
        method,
        url,
        headers: integration
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        timeout_seconds: integrator.config.timeout().map(|t| t.as_secs()),
        auth_scheme: integration.auth.as_ref().map(|auth| auth.r#type.clone()),
        has_body: integration.body.is_some(),
    })
}
