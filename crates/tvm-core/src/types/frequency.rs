//! Compounding frequency type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Number of compounding periods in a year.
///
/// Named variants cover the conventions used on the Mexican money market
/// (daily on a 360-day year, biweekly "quincenal" and so on). Any other
/// positive count is a [`Frequency::Custom`].
///
/// Serializes as its period count, so `Monthly` is `12` and a custom
/// frequency of 13 is `13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Frequency {
    /// Annual compounding (1 per year)
    Annual,
    /// Semi-annual compounding (2 per year)
    SemiAnnual,
    /// Every four months (3 per year)
    FourMonthly,
    /// Quarterly compounding (4 per year)
    Quarterly,
    /// Bimonthly compounding (6 per year)
    Bimonthly,
    /// Monthly compounding (12 per year)
    #[default]
    Monthly,
    /// Biweekly compounding (24 per year)
    Biweekly,
    /// Weekly compounding (52 per year)
    Weekly,
    /// Daily compounding on a 360-day year
    Daily,
    /// Any other positive number of periods per year
    Custom(NonZeroU32),
}

/// Lookup table shared by name parsing, integer parsing, display and period
/// counts. The first name of each row is the display name; the rest are
/// accepted aliases, including the term labels (`1m`, `6m`, `1y`).
const NAMED: [(Frequency, &[&str], u32); 9] = [
    (Frequency::Annual, &["annual", "1y"], 1),
    (Frequency::SemiAnnual, &["semiannual", "6m"], 2),
    (Frequency::FourMonthly, &["fourmonthly", "4m"], 3),
    (Frequency::Quarterly, &["quarterly", "3m"], 4),
    (Frequency::Bimonthly, &["bimonthly", "2m"], 6),
    (Frequency::Monthly, &["monthly", "1m"], 12),
    (Frequency::Biweekly, &["biweekly"], 24),
    (Frequency::Weekly, &["weekly"], 52),
    (Frequency::Daily, &["daily"], 360),
];

impl Frequency {
    /// Returns the frequency with `periods` compounding periods per year.
    ///
    /// Counts that match a named variant return that variant.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFrequency` if `periods` is zero.
    pub fn from_periods(periods: u32) -> CoreResult<Self> {
        if let Some((freq, _, _)) = NAMED.iter().find(|(_, _, n)| *n == periods) {
            return Ok(*freq);
        }
        NonZeroU32::new(periods)
            .map(Frequency::Custom)
            .ok_or_else(|| CoreError::invalid_frequency(periods.to_string()))
    }

    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        if let Frequency::Custom(n) = self {
            return n.get();
        }
        // Every named variant has a row in the table.
        NAMED
            .iter()
            .find(|(freq, _, _)| freq == self)
            .map(|(_, _, n)| *n)
            .unwrap_or_default()
    }

    /// Periods per year as a float, ready for the rate formulas.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.periods_per_year())
    }

    /// Returns the table name, or `None` for a custom count.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(freq, _, _)| freq == self)
            .and_then(|(_, names, _)| names.first().copied())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{}x", self.periods_per_year()),
        }
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    /// Parses either a table name or alias (case-insensitive, `-`/`_`
    /// ignored) or a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        if let Some((freq, _, _)) = NAMED
            .iter()
            .find(|(_, names, _)| names.contains(&normalized.as_str()))
        {
            return Ok(*freq);
        }

        trimmed
            .parse::<u32>()
            .map_err(|_| CoreError::invalid_frequency(s))
            .and_then(Frequency::from_periods)
    }
}

impl TryFrom<u32> for Frequency {
    type Error = CoreError;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Frequency::from_periods(periods)
    }
}

impl From<Frequency> for u32 {
    fn from(freq: Frequency) -> Self {
        freq.periods_per_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Biweekly.periods_per_year(), 24);
        assert_eq!(Frequency::Daily.periods_per_year(), 360);
        assert_eq!(Frequency::FourMonthly.periods_per_year(), 3);
    }

    #[test]
    fn test_from_periods_prefers_named() {
        assert_eq!(Frequency::from_periods(12).unwrap(), Frequency::Monthly);
        assert_eq!(Frequency::from_periods(360).unwrap(), Frequency::Daily);

        let custom = Frequency::from_periods(13).unwrap();
        assert!(matches!(custom, Frequency::Custom(_)));
        assert_eq!(custom.periods_per_year(), 13);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(Frequency::from_periods(0).is_err());
        assert!(Frequency::try_from(0).is_err());
        assert!("0".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("Daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(
            "semi-annual".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnual
        );
        assert_eq!(
            "SEMI_ANNUAL".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnual
        );
        assert!("fortnightly-ish".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!("4".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("7".parse::<Frequency>().unwrap().periods_per_year(), 7);
        assert_eq!(" 360 ".parse::<Frequency>().unwrap(), Frequency::Daily);
    }

    #[test]
    fn test_signs_and_separators_are_not_digits() {
        assert!("-4".parse::<Frequency>().is_err());
        assert!("1-2".parse::<Frequency>().is_err());
        assert!("1_2".parse::<Frequency>().is_err());
        assert!("+-12".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_parse_term_labels() {
        assert_eq!("1y".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!("6m".parse::<Frequency>().unwrap(), Frequency::SemiAnnual);
        assert_eq!("4m".parse::<Frequency>().unwrap(), Frequency::FourMonthly);
        assert_eq!("3M".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("2m".parse::<Frequency>().unwrap(), Frequency::Bimonthly);
        assert_eq!("1m".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!(Frequency::FourMonthly.periods_per_year(), 3);
        assert!("5m".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Frequency::Weekly.to_string(), "weekly");
        assert_eq!(Frequency::from_periods(13).unwrap().to_string(), "13x");
    }

    #[test]
    fn test_name_round_trip() {
        for (freq, names, periods) in NAMED {
            for name in names {
                assert_eq!(name.parse::<Frequency>().unwrap(), freq);
            }
            assert_eq!(freq.periods_per_year(), periods);
            assert_eq!(Frequency::from_periods(periods).unwrap(), freq);
        }
    }

    #[test]
    fn test_serde_uses_period_count() {
        assert_eq!(serde_json::to_string(&Frequency::Monthly).unwrap(), "12");
        assert_eq!(
            serde_json::to_string(&Frequency::from_periods(13).unwrap()).unwrap(),
            "13"
        );
        assert_eq!(
            serde_json::from_str::<Frequency>("360").unwrap(),
            Frequency::Daily
        );
        assert!(serde_json::from_str::<Frequency>("0").is_err());
        assert!(serde_json::from_str::<Frequency>("-4").is_err());
    }
}
