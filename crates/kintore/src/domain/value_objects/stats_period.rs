//! StatsPeriod - Time window for aggregate statistics

use chrono::{DateTime, Duration, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Window over which workout statistics are computed.
///
/// The window includes every record created at or after [`StatsPeriod::window_start`].
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StatsPeriod {
    /// Since midnight UTC
    Today,
    /// Last 7 days
    Week,
    /// Last calendar month
    Month,
    /// Last 30 days
    #[default]
    Last30Days,
}

impl StatsPeriod {
    /// Parse a period name; unknown or empty names fall back to the 30 day default.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn window_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            StatsPeriod::Today => now.date_naive().and_time(NaiveTime::MIN).and_utc(),
            StatsPeriod::Week => now - Duration::days(7),
            StatsPeriod::Month => now
                .checked_sub_months(Months::new(1))
                .unwrap_or(now - Duration::days(30)),
            StatsPeriod::Last30Days => now - Duration::days(30),
        }
    }
}

impl std::fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsPeriod::Today => write!(f, "today"),
            StatsPeriod::Week => write!(f, "week"),
            StatsPeriod::Month => write!(f, "month"),
            StatsPeriod::Last30Days => write!(f, "last_30_days"),
        }
    }
}

impl std::str::FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" => Ok(StatsPeriod::Today),
            "week" => Ok(StatsPeriod::Week),
            "month" => Ok(StatsPeriod::Month),
            "last_30_days" => Ok(StatsPeriod::Last30Days),
            _ => Err(format!("Unknown stats period: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_unknown_period_falls_back_to_thirty_days() {
        assert_eq!(StatsPeriod::parse_lenient(""), StatsPeriod::Last30Days);
        assert_eq!(StatsPeriod::parse_lenient("year"), StatsPeriod::Last30Days);
        assert_eq!(StatsPeriod::parse_lenient("WEEK"), StatsPeriod::Week);
    }

    #[test]
    fn test_today_starts_at_utc_midnight() {
        let start = StatsPeriod::Today.window_start(noon());
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rolling_windows() {
        let now = noon();
        assert_eq!(StatsPeriod::Week.window_start(now), now - Duration::days(7));
        assert_eq!(
            StatsPeriod::Month.window_start(now),
            Utc.with_ymd_and_hms(2024, 2, 15, 12, 30, 0).unwrap()
        );
        assert_eq!(
            StatsPeriod::Last30Days.window_start(now),
            Utc.with_ymd_and_hms(2024, 2, 14, 12, 30, 0).unwrap()
        );
    }
}
