use std::env;
use std::str::FromStr;
use std::time::Duration;

use wb_core::clock::DEFAULT_WINDOW_MS;
use wb_core::ticker::TICK_PERIOD;
use wb_core::CategoryFilter;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct WbConfig {
    pub tick_period: Duration,
    pub window_ms: i64,
    pub run_for: Duration,
    pub query: String,
    pub category: CategoryFilter,
}

impl Default for WbConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            window_ms: DEFAULT_WINDOW_MS,
            run_for: Duration::from_secs(30),
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl WbConfig {
    /// Reads `WB_*` variables, after loading `.env` if one exists
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let tick_ms: u64 = parse_var(&lookup, "WB_TICK_MS")?
            .unwrap_or(defaults.tick_period.as_millis() as u64);
        let window_ms: i64 = parse_var(&lookup, "WB_WINDOW_MS")?.unwrap_or(defaults.window_ms);
        let run_secs: u64 =
            parse_var(&lookup, "WB_RUN_SECS")?.unwrap_or(defaults.run_for.as_secs());

        if tick_ms == 0 {
            return Err(AppError::Config {
                key: "WB_TICK_MS",
                value: tick_ms.to_string(),
            }
            .into());
        }
        if window_ms <= 0 {
            return Err(AppError::Config {
                key: "WB_WINDOW_MS",
                value: window_ms.to_string(),
            }
            .into());
        }

        Ok(Self {
            tick_period: Duration::from_millis(tick_ms),
            window_ms,
            run_for: Duration::from_secs(run_secs),
            query: lookup("WB_QUERY").unwrap_or_default(),
            category: lookup("WB_CATEGORY")
                .map(|c| CategoryFilter::parse(&c))
                .unwrap_or(defaults.category),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, AppError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<WbConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WbConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let conf = load(&[]).unwrap();
        assert_eq!(conf.tick_period, Duration::from_secs(1));
        assert_eq!(conf.window_ms, 1_200_000);
        assert_eq!(conf.category, CategoryFilter::All);
        assert!(conf.query.is_empty());
    }

    #[test]
    fn test_overrides() {
        let conf = load(&[
            ("WB_TICK_MS", "250"),
            ("WB_WINDOW_MS", "600000"),
            ("WB_QUERY", "kitchen"),
            ("WB_CATEGORY", "Plumbing"),
        ])
        .unwrap();
        assert_eq!(conf.tick_period, Duration::from_millis(250));
        assert_eq!(conf.window_ms, 600_000);
        assert_eq!(conf.query, "kitchen");
        assert_eq!(conf.category, CategoryFilter::Only("plumbing".into()));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let err = load(&[("WB_WINDOW_MS", "soon")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 'soon' for WB_WINDOW_MS");
        assert!(load(&[("WB_TICK_MS", "0")]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let err = load(&[("WB_WINDOW_MS", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value '0' for WB_WINDOW_MS");
        assert!(load(&[("WB_WINDOW_MS", "-1200000")]).is_err());
    }
}
