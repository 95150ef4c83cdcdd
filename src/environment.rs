use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the CLI.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Staging environment for pre-production testing.
    Staging,
    /// Production storefront.
    #[default]
    Production,
    /// A user-supplied analytics API base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Environment backed by an explicit API base URL.
    pub fn custom(api_base_url: impl Into<String>) -> Self {
        Environment::Custom {
            api_base_url: api_base_url.into(),
        }
    }

    /// Returns the analytics API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000/api/v1/analytics".to_string(),
            Environment::Staging => "https://staging.api.storepulse.dev/api/v1/analytics".to_string(),
            Environment::Production => "https://api.storepulse.dev/api/v1/analytics".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
