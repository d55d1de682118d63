use std::path::PathBuf;

use chrono::{Local, NaiveDate};

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub app_name: String,
    pub data_file: Option<PathBuf>,
    pub page_size: usize,
    pub demo_mode: bool,
    /// Pins "today" for every time-dependent view when set.
    pub reference_date: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: DEFAULT_BIND.to_string(),
            app_name: "OASIS".to_string(),
            data_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            demo_mode: false,
            reference_date: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AppConfig::default();

        if let Some(bind) = lookup("OASIS_BIND").filter(|v| !v.trim().is_empty()) {
            cfg.bind = bind.trim().to_string();
        }
        if let Some(name) = lookup("OASIS_APP_NAME").filter(|v| !v.trim().is_empty()) {
            cfg.app_name = name.trim().to_string();
        }
        cfg.data_file = lookup("OASIS_DATA_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()));

        if let Some(raw) = lookup("OASIS_PAGE_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => cfg.page_size = n,
                _ => log::warn!("OASIS_PAGE_SIZE={raw:?} is not a positive integer, using {DEFAULT_PAGE_SIZE}"),
            }
        }
        if let Some(raw) = lookup("OASIS_DEMO_MODE") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => cfg.demo_mode = true,
                "" | "0" | "false" | "no" | "off" => cfg.demo_mode = false,
                _ => log::warn!("OASIS_DEMO_MODE={raw:?} is not a boolean, demo mode stays off"),
            }
        }
        if let Some(raw) = lookup("OASIS_REFERENCE_DATE") {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(d) => cfg.reference_date = Some(d),
                Err(_) => log::warn!("OASIS_REFERENCE_DATE={raw:?} is not YYYY-MM-DD, using the clock"),
            }
        }
        cfg
    }

    /// The date views are computed against.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(|| Local::now().date_naive())
    }
}
