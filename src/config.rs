use clap::Parser;

use crate::error::AppError;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "inventory", about = "Interactive inventory and purchase tracker", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "INVENTORY_CHANNEL_CAPACITY",
        value_name = "N",
        help = "Number of requests the inventory service buffers",
        value_parser = clap::value_parser!(usize)
    )]
    pub channel_capacity: Option<usize>,

    #[arg(
        long,
        env = "INVENTORY_LOG",
        value_name = "FILTER",
        help = "Log filter directive used when RUST_LOG is unset"
    )]
    pub log_filter: Option<String>,

    #[arg(
        long,
        env = "INVENTORY_CURRENCY",
        value_name = "SYMBOL",
        help = "Currency symbol printed before amounts"
    )]
    pub currency: Option<String>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub channel_capacity: usize,
    pub log_filter: String,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_args(args: CliArgs) -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            channel_capacity: args.channel_capacity.unwrap_or(defaults.channel_capacity),
            log_filter: args.log_filter.unwrap_or(defaults.log_filter),
            currency: args.currency.unwrap_or(defaults.currency),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.channel_capacity == 0 {
            return Err(AppError::Config(
                "channel capacity must be greater than zero".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(AppError::Config("log filter must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_args() {
        let config = AppConfig::from_args(CliArgs::default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_args_override_defaults() {
        let args = CliArgs::try_parse_from([
            "inventory",
            "--channel-capacity",
            "8",
            "--currency",
            "$",
        ])
        .unwrap();
        let config = AppConfig::from_args(args).unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let args = CliArgs {
            channel_capacity: Some(0),
            ..CliArgs::default()
        };
        assert!(matches!(AppConfig::from_args(args), Err(AppError::Config(_))));
    }
}
