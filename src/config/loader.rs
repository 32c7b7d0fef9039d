use crate::domain::model::{ServiceIntegration, ServiceIntegrator};
use crate::utils::error::{IntegratorError, Result};
use regex::{Captures, Regex};
use std::path::Path;

/// Replaces `${NAME}` with the value of environment variable `NAME`.
/// Unset variables are left as written.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IntegratorError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            tracing::warn!("Environment variable '{}' is not set", var_name);
            format!("${{{}}}", var_name)
        })
    });

    Ok(result.into_owned())
}

fn read_definition(path: &Path) -> Result<String> {
    tracing::debug!("Loading definitions from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    substitute_env_vars(&content)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

impl ServiceIntegrator {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(serde_json::from_str(&processed)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Loads a `.json` or `.toml` definition. Does not validate.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let integrator: Self = match extension(path).as_deref() {
            Some("json") => serde_json::from_str(&read_definition(path)?)?,
            Some("toml") => toml::from_str(&read_definition(path)?)?,
            _ => {
                return Err(IntegratorError::ConfigError {
                    message: format!(
                        "unsupported definition file '{}': expected .json or .toml",
                        path.display()
                    ),
                })
            }
        };

        tracing::info!(
            "Loaded {} service(s) from {}",
            integrator.services.len(),
            path.display()
        );
        Ok(integrator)
    }
}

impl ServiceIntegration {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(serde_json::from_str(&processed)?)
    }

    /// JSON only: the body is kept as a raw JSON fragment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if extension(path).as_deref() != Some("json") {
            return Err(IntegratorError::ConfigError {
                message: format!(
                    "unsupported integration file '{}': expected .json",
                    path.display()
                ),
            });
        }
        Ok(serde_json::from_str(&read_definition(path)?)?)
    }
}
