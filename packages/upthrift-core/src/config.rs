use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::common::DEFAULT_PAGE_SIZE;
use crate::domains::listings::options::{MAX_RADIUS_MILES, MIN_RADIUS_MILES};

/// Application configuration.
///
/// Defaults are the app's fixed timings and limits; `from_env` lets a developer
/// shorten the simulated delays or point the catalog at another seed file.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page_size: usize,
    pub default_radius_miles: u32,
    pub payment_delay: Duration,
    pub verification_delay: Duration,
    pub support_reply_delay: Duration,
    pub membership_fee_usd: u32,
    /// Prefix for shareable listing links (`{origin}/#listing-{id}`).
    pub public_origin: String,
    /// JSON file replacing the embedded listing seed.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_radius_miles: 25,
            payment_delay: Duration::from_millis(3000),
            verification_delay: Duration::from_millis(3000),
            support_reply_delay: Duration::from_millis(1000),
            membership_fee_usd: 20,
            public_origin: "http://localhost:8080".to_string(),
            seed_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let config = Self {
            page_size: parse_var("UPTHRIFT_PAGE_SIZE", defaults.page_size)
                .context("UPTHRIFT_PAGE_SIZE must be a whole number")?,
            default_radius_miles: parse_var("UPTHRIFT_DEFAULT_RADIUS", defaults.default_radius_miles)
                .context("UPTHRIFT_DEFAULT_RADIUS must be a whole number of miles")?,
            payment_delay: parse_millis("UPTHRIFT_PAYMENT_DELAY_MS", defaults.payment_delay)
                .context("UPTHRIFT_PAYMENT_DELAY_MS must be a number of milliseconds")?,
            verification_delay: parse_millis(
                "UPTHRIFT_VERIFICATION_DELAY_MS",
                defaults.verification_delay,
            )
            .context("UPTHRIFT_VERIFICATION_DELAY_MS must be a number of milliseconds")?,
            support_reply_delay: parse_millis(
                "UPTHRIFT_SUPPORT_REPLY_DELAY_MS",
                defaults.support_reply_delay,
            )
            .context("UPTHRIFT_SUPPORT_REPLY_DELAY_MS must be a number of milliseconds")?,
            membership_fee_usd: parse_var("UPTHRIFT_MEMBERSHIP_FEE", defaults.membership_fee_usd)
                .context("UPTHRIFT_MEMBERSHIP_FEE must be a whole number of dollars")?,
            public_origin: env::var("UPTHRIFT_PUBLIC_ORIGIN").unwrap_or(defaults.public_origin),
            seed_path: env::var("UPTHRIFT_SEED_PATH").ok().map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the catalog cannot honour.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.page_size > 0,
            "UPTHRIFT_PAGE_SIZE must be a positive number, got {}",
            self.page_size
        );
        ensure!(
            (MIN_RADIUS_MILES..=MAX_RADIUS_MILES).contains(&self.default_radius_miles),
            "UPTHRIFT_DEFAULT_RADIUS must be between {} and {} miles, got {}",
            MIN_RADIUS_MILES,
            MAX_RADIUS_MILES,
            self.default_radius_miles
        );
        Ok(())
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}

fn parse_millis(key: &str, default: Duration) -> Result<Duration> {
    match env::var(key) {
        Ok(raw) => Ok(Duration::from_millis(raw.trim().parse::<u64>()?)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_app_constants() {
        let config = Config::default();

        assert_eq!(config.page_size, 16);
        assert_eq!(config.default_radius_miles, 25);
        assert_eq!(config.payment_delay, Duration::from_millis(3000));
        assert_eq!(config.verification_delay, Duration::from_millis(3000));
        assert_eq!(config.support_reply_delay, Duration::from_millis(1000));
        assert_eq!(config.membership_fee_usd, 20);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };

        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("UPTHRIFT_PAGE_SIZE"));
    }

    #[test]
    fn radius_outside_slider_range_is_rejected() {
        for radius in [0, 26] {
            let config = Config {
                default_radius_miles: radius,
                ..Config::default()
            };

            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("UPTHRIFT_DEFAULT_RADIUS"));
        }

        let edge = Config {
            default_radius_miles: 1,
            ..Config::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn unset_variable_falls_back_to_default() {
        let value: usize = parse_var("UPTHRIFT_TEST_UNSET_VARIABLE", 16).unwrap();
        assert_eq!(value, 16);
    }
}
