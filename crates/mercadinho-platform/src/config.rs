use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub const CATALOG_PATH_VAR: &str = "MERCADINHO_CATALOG_PATH";
pub const REFERENCE_DATE_VAR: &str = "MERCADINHO_REFERENCE_DATE";

#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    pub catalog_path: Option<PathBuf>,
    pub reference_date: Option<DateTime<Utc>>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let reference_date = match lookup(REFERENCE_DATE_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(parse_reference_date(&raw)?),
            _ => None,
        };

        Ok(Self {
            catalog_path,
            reference_date,
        })
    }

    pub fn require_catalog_path(&self) -> Result<&PathBuf> {
        self.catalog_path
            .as_ref()
            .context("MERCADINHO_CATALOG_PATH is required")
    }

    pub fn reference_date_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.reference_date.unwrap_or(now)
    }
}

pub fn parse_reference_date(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("invalid reference date `{raw}`, expected RFC 3339"))?;
    Ok(parsed.with_timezone(&Utc))
}
