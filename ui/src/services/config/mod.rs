use reqwest::Url;

use crate::features::execution::{DEFAULT_ENDPOINT_PREFIX, JSON_CONTENT_TYPE};
use crate::services::client::{ClientError, ClientResult};
use crate::utils::platform;

/// Settings for the execution admin page
#[derive(Debug, Clone, PartialEq)]
pub struct AdminConfig {
    /// Absolute URL endpoints resolve against. `None` means the hosting page URL.
    pub base_url: Option<String>,
    /// Path segment the endpoints are mounted under, relative to the base URL
    pub endpoint_prefix: String,
    /// Content type declared on every request
    pub content_type: String,
    pub user_agent: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            endpoint_prefix: DEFAULT_ENDPOINT_PREFIX.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            user_agent: "budget-execution-admin/0.1".to_string(),
        }
    }
}

impl AdminConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(base_url) = &self.base_url {
            if let Err(e) = Url::parse(base_url) {
                errors.push(format!("base_url '{}' is not an absolute URL: {}", base_url, e));
            }
        }

        if self.content_type.trim().is_empty() {
            errors.push("content_type must not be empty".to_string());
        }

        if self.endpoint_prefix.contains(['?', '#']) {
            errors.push("endpoint_prefix must be a plain path".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// URL relative endpoint paths are resolved against
    pub fn resolve_base_url(&self) -> ClientResult<Url> {
        let raw = match &self.base_url {
            Some(base_url) => base_url.clone(),
            None => platform::page_url().map_err(|e| ClientError::InvalidBaseUrl {
                url: "window.location".to_string(),
                reason: format!("{:#}", e),
            })?,
        };

        Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        let config = AdminConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint_prefix, "execution");
        assert_eq!(config.content_type, "application/json; charset=utf-8");
    }

    #[test]
    fn test_invalid_config() {
        let config = AdminConfig {
            base_url: Some("admin/execution".to_string()),
            content_type: " ".to_string(),
            endpoint_prefix: "execution?x=1".to_string(),
            ..AdminConfig::default()
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let config = AdminConfig {
            base_url: Some("https://presupuestos.example.org/admin/execution".to_string()),
            ..AdminConfig::default()
        };
        let url = config.resolve_base_url().unwrap();
        assert_eq!(url.path(), "/admin/execution");
    }

    #[test]
    fn test_bad_base_url_is_reported() {
        let config = AdminConfig {
            base_url: Some("::nope".to_string()),
            ..AdminConfig::default()
        };
        assert!(matches!(
            config.resolve_base_url(),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_page_url_unavailable_outside_browser() {
        let config = AdminConfig::default();
        assert!(matches!(
            config.resolve_base_url(),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }
}
