use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SERVICE_CHARGE_PERCENT: i64 = 10;
const DEFAULT_MIN_WITHDRAW_AMOUNT: i64 = 5000;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_addr: String,

    /// Commission withheld from each delivered order, in percent.
    pub service_charge_percent: i64,
    /// Smallest payout a seller may request, in cents.
    pub min_withdraw_amount: i64,
    pub secure_cookies: bool,

    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let service_charge_percent = in_range(
            "SERVICE_CHARGE_PERCENT",
            parse_or("SERVICE_CHARGE_PERCENT", DEFAULT_SERVICE_CHARGE_PERCENT)?,
            0..=100,
        )?;
        let min_withdraw_amount = in_range(
            "MIN_WITHDRAW_AMOUNT",
            parse_or("MIN_WITHDRAW_AMOUNT", DEFAULT_MIN_WITHDRAW_AMOUNT)?,
            1..=i64::MAX,
        )?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            service_charge_percent,
            min_withdraw_amount,
            secure_cookies: parse_or("SECURE_COOKIES", false)?,
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn in_range(
    name: &str,
    value: i64,
    range: std::ops::RangeInclusive<i64>,
) -> Result<i64, ConfigError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the minimum payout bound.
    ///
    /// Expected: zero and negative amounts rejected, one cent accepted
    #[test]
    fn min_withdraw_amount_must_be_positive() {
        for value in [0, -5000] {
            assert!(matches!(
                in_range("MIN_WITHDRAW_AMOUNT", value, 1..=i64::MAX),
                Err(ConfigError::InvalidEnvVar { .. })
            ));
        }

        assert_eq!(in_range("MIN_WITHDRAW_AMOUNT", 1, 1..=i64::MAX).ok(), Some(1));
    }

    /// Tests the commission percentage bounds.
    ///
    /// Expected: 0 and 100 accepted, 101 rejected
    #[test]
    fn service_charge_percent_bounds() {
        assert!(in_range("SERVICE_CHARGE_PERCENT", 0, 0..=100).is_ok());
        assert!(in_range("SERVICE_CHARGE_PERCENT", 100, 0..=100).is_ok());
        assert!(in_range("SERVICE_CHARGE_PERCENT", 101, 0..=100).is_err());
    }
}
