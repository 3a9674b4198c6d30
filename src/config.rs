//! Service configuration, sourced from the environment.
//!
//! The credential and the destination database ids have no embedded
//! defaults: a missing variable fails startup rather than silently writing
//! to the wrong place.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use log::debug;

use crate::forms;

/// Default bind address for the submission service
pub const DEFAULT_BIND: &str = "127.0.0.1:8700";

/// Default submission endpoint base targeted by the wizard
pub const DEFAULT_SUBMIT_URL: &str = "http://127.0.0.1:8700/api/submit";

/// Default outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the external store
    pub api_key: String,
    /// Destination database id per form slug, one entry per catalog form
    pub databases: HashMap<String, String>,
    /// Listen address of the submission service
    pub bind_addr: String,
    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load service configuration from the environment, failing closed when
    /// the credential or any catalog form's database id is missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("NOTION_API_KEY").context("NOTION_API_KEY is not set")?;
        if api_key.trim().is_empty() {
            bail!("NOTION_API_KEY is empty");
        }

        let mut databases = HashMap::new();
        for schema in forms::catalog() {
            let var = database_var(schema.slug);
            let id = std::env::var(&var).with_context(|| {
                format!("{} is not set (database id for form '{}')", var, schema.slug)
            })?;
            if id.trim().is_empty() {
                bail!("{} is empty", var);
            }
            databases.insert(schema.slug.to_string(), id);
        }

        let bind_addr =
            std::env::var("INTAKE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let timeout_secs = match std::env::var("INTAKE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("INTAKE_TIMEOUT_SECS is not a number: '{raw}'"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        debug!("Loaded config with {} form databases", databases.len());

        Ok(Self {
            api_key,
            databases,
            bind_addr,
            timeout_secs,
        })
    }

    /// Destination database id for a form slug.
    pub fn database_for(&self, slug: &str) -> Option<&str> {
        self.databases.get(slug).map(String::as_str)
    }
}

/// Environment variable carrying a form's destination database id.
pub fn database_var(slug: &str) -> String {
    format!("NOTION_DB_{}", slug.to_uppercase().replace('-', "_"))
}

/// Submission endpoint base for the wizard, from the environment or default.
pub fn submit_url_from_env() -> String {
    dotenvy::dotenv().ok();
    std::env::var("INTAKE_SUBMIT_URL").unwrap_or_else(|_| DEFAULT_SUBMIT_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_var_names() {
        assert_eq!(database_var("onboarding"), "NOTION_DB_ONBOARDING");
        assert_eq!(database_var("lead-magnet"), "NOTION_DB_LEAD_MAGNET");
    }
}
