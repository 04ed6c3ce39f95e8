//! The two merchandise seasons.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::validate::validate_period;

/// Half of a merchandise year. Spring holds periods 1-6, Fall periods 7-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Fall,
}

impl Season {
    pub const ALL: [Season; 2] = [Season::Spring, Season::Fall];

    /// First period of the season (1 or 7).
    pub fn first_period(self) -> u32 {
        match self {
            Season::Spring => 1,
            Season::Fall => 7,
        }
    }

    /// The six periods of the season, in order.
    pub fn periods(self) -> RangeInclusive<u32> {
        let start = self.first_period();
        start..=start + 5
    }

    /// The season a period belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12.
    pub fn of_period(period: u32) -> Result<Season> {
        let period = validate_period(period)?;
        Ok(if period <= 6 {
            Season::Spring
        } else {
            Season::Fall
        })
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => f.write_str("spring"),
            Season::Fall => f.write_str("fall"),
        }
    }
}

impl FromStr for Season {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Season> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "fall" => Ok(Season::Fall),
            _ => Err(CalendarError::InvalidSeason(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_season() {
        assert_eq!(Season::Spring.periods().collect::<Vec<_>>(), (1..=6).collect::<Vec<_>>());
        assert_eq!(Season::Fall.periods().collect::<Vec<_>>(), (7..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_of_period() {
        assert_eq!(Season::of_period(1), Ok(Season::Spring));
        assert_eq!(Season::of_period(6), Ok(Season::Spring));
        assert_eq!(Season::of_period(7), Ok(Season::Fall));
        assert_eq!(Season::of_period(12), Ok(Season::Fall));
        assert_eq!(
            Season::of_period(13),
            Err(CalendarError::InvalidPeriod { period: 13 })
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Spring".parse::<Season>(), Ok(Season::Spring));
        assert_eq!(" FALL ".parse::<Season>(), Ok(Season::Fall));
    }

    #[test]
    fn test_parse_rejects_other_names() {
        let err = "autumn".parse::<Season>().unwrap_err();
        assert_eq!(err, CalendarError::InvalidSeason("autumn".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"fall\"");
        let parsed: Season = serde_json::from_str("\"spring\"").unwrap();
        assert_eq!(parsed, Season::Spring);
    }

    #[test]
    fn test_display_matches_parse() {
        for season in Season::ALL {
            assert_eq!(season.to_string().parse::<Season>(), Ok(season));
        }
    }
}
