//! Base URL selection for the DocuSign REST API.
//!
//! DocuSign splits its API across a demo (sandbox) host and per-region
//! production hosts. The account-scoped path prefix is appended by the HTTP
//! layer, not here.

use serde::{Deserialize, Serialize};

/// Demo (sandbox) REST API base URL.
pub const DEMO_API_URL: &str = "https://demo.docusign.net/restapi/v2.1";

/// API environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Demo,
    Production,
}

/// Production data-center region. Ignored in the demo environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Na,
    Eu,
    Au,
    Ca,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Au => "au",
            Region::Ca => "ca",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the REST API base URL for an environment/region pair.
pub fn base_url(environment: Environment, region: Region) -> String {
    match environment {
        Environment::Demo => DEMO_API_URL.to_string(),
        Environment::Production => {
            format!("https://{}.docusign.net/restapi/v2.1", region.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_ignores_region() {
        assert_eq!(base_url(Environment::Demo, Region::Eu), DEMO_API_URL);
        assert_eq!(base_url(Environment::Demo, Region::Na), DEMO_API_URL);
    }

    #[test]
    fn test_production_selects_regional_host() {
        assert_eq!(
            base_url(Environment::Production, Region::Eu),
            "https://eu.docusign.net/restapi/v2.1"
        );
        assert_eq!(
            base_url(Environment::Production, Region::Na),
            "https://na.docusign.net/restapi/v2.1"
        );
    }
}
