//! Fixed-rate debt discounted at the CETES benchmark.
//!
//! A [`Debt`] accrues its reference rate daily (360-day year) from issue to
//! maturity. The amount due at maturity is fixed at construction and
//! rounded to cents; paying early discounts that amount back at the 28-day
//! CETES yield.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tvm_analytics::conversions::RateConversions;
use tvm_analytics::functions::{
    checked_equivalent_rate, equivalent_annual_interest, future_value, present_value,
};
use tvm_core::types::{Date, Frequency, Rate};
use tvm_market::{BenchmarkSource, BenchmarkTable, Tenor};

use crate::error::{InstrumentError, InstrumentResult};

/// Tenor used to discount early payoffs.
pub const DISCOUNT_TENOR: Tenor = Tenor::Days28;

/// Principal a [`DebtBuilder`] starts from.
pub const DEFAULT_PRINCIPAL: f64 = 10_000.0;

/// Decimal places kept in the maturity value.
const CENTS: u32 = 2;

/// A single-payment debt with a fixed reference rate.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use tvm_core::types::{Date, Frequency, Rate};
/// use tvm_instruments::Debt;
/// use tvm_market::BenchmarkTable;
///
/// let cetes = BenchmarkTable::new(dec!(10.25), dec!(10.40), dec!(10.55), "manual");
/// let debt = Debt::parse(
///     "Jan 15 2024",
///     "Jan 15 2025",
///     10_000.0,
///     Rate::new(0.01, Frequency::Monthly).unwrap(),
///     cetes,
/// )
/// .unwrap();
///
/// assert_eq!(debt.term_days(), 366);
/// assert!(debt.maturity_value() > 10_000.0);
///
/// let as_of = Date::parse("Jul 15 2024").unwrap();
/// assert!(debt.pay_debt(Some(as_of)).unwrap() < debt.maturity_value());
/// ```
#[derive(Debug, Clone)]
pub struct Debt {
    issue_date: Date,
    maturity_date: Date,
    principal: f64,
    reference_rate: Rate,
    maturity_value: f64,
    benchmarks: BenchmarkTable,
}

impl Debt {
    /// Creates a debt and computes its maturity value.
    ///
    /// # Errors
    ///
    /// Fails if maturity is before issue, the principal is not a positive
    /// finite number, the reference rate cannot be expressed daily, or the
    /// maturity value overflows.
    pub fn new(
        issue_date: Date,
        maturity_date: Date,
        principal: f64,
        reference_rate: Rate,
        benchmarks: BenchmarkTable,
    ) -> InstrumentResult<Self> {
        if maturity_date < issue_date {
            return Err(InstrumentError::MaturityBeforeIssue {
                issue: issue_date.to_string(),
                maturity: maturity_date.to_string(),
            });
        }
        if !(principal.is_finite() && principal > 0.0) {
            return Err(InstrumentError::invalid_spec(format!(
                "principal must be positive, got {principal}"
            )));
        }

        let term_days = issue_date.days_between(&maturity_date);
        let daily = reference_rate.periodic_at(Frequency::Daily)?;
        let maturity_value = round_to_cents(future_value(principal, daily, term_days as f64))?;

        log::debug!(
            "debt {} -> {} ({} days) at {}: maturity value {:.2}",
            issue_date,
            maturity_date,
            term_days,
            reference_rate,
            maturity_value
        );

        Ok(Self {
            issue_date,
            maturity_date,
            principal,
            reference_rate,
            maturity_value,
            benchmarks,
        })
    }

    /// Creates a debt from dates written as `Jan 15 2024` (or ISO).
    ///
    /// # Errors
    ///
    /// Fails on unparsable dates, and for the same reasons as [`Debt::new`].
    pub fn parse(
        issue_date: &str,
        maturity_date: &str,
        principal: f64,
        reference_rate: Rate,
        benchmarks: BenchmarkTable,
    ) -> InstrumentResult<Self> {
        Self::new(
            Date::parse(issue_date)?,
            Date::parse(maturity_date)?,
            principal,
            reference_rate,
            benchmarks,
        )
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> DebtBuilder {
        DebtBuilder::default()
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Issue date.
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Maturity date.
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Principal lent at issue.
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Reference rate the debt accrues at.
    pub fn reference_rate(&self) -> Rate {
        self.reference_rate
    }

    /// Amount due at maturity.
    pub fn maturity_value(&self) -> f64 {
        self.maturity_value
    }

    /// Benchmark table used for discounting.
    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    /// Calendar days from issue to maturity.
    pub fn term_days(&self) -> i64 {
        self.issue_date.days_between(&self.maturity_date)
    }

    // ---------------------------------------------------------------------
    // Valuation
    // ---------------------------------------------------------------------

    /// Days from `as_of` (default: today) to maturity. Negative once matured.
    pub fn days_to_go(&self, as_of: Option<Date>) -> i64 {
        as_of
            .unwrap_or_else(Date::today)
            .days_between(&self.maturity_date)
    }

    /// The 28-day CETES yield re-expressed as a nominal annual rate
    /// compounding `frequency` times a year, as a decimal fraction.
    ///
    /// The published yield compounds once per 28 days on a 360-day year.
    pub fn discount_rate(&self, frequency: Frequency) -> InstrumentResult<f64> {
        let benchmark = self.benchmarks.fraction(DISCOUNT_TENOR);
        let rate = checked_equivalent_rate(
            benchmark,
            DISCOUNT_TENOR.compounding_per_year(),
            frequency.as_f64(),
        )?;
        Ok(rate)
    }

    /// Amount that settles the debt on `as_of` (default: today): the
    /// maturity value discounted daily at the benchmark rate.
    pub fn pay_debt(&self, as_of: Option<Date>) -> InstrumentResult<f64> {
        let days = self.days_to_go(as_of);
        if days < 0 {
            log::warn!(
                "paying debt {} days after maturity {}",
                -days,
                self.maturity_date
            );
        }
        let daily = self.discount_rate(Frequency::Daily)? / Frequency::Daily.as_f64();
        Ok(present_value(self.maturity_value, daily, days as f64))
    }

    /// Reference rate re-expressed as a nominal annual rate at `frequency`.
    pub fn annual_rate(&self, frequency: Frequency) -> InstrumentResult<f64> {
        Ok(self.reference_rate.to_frequency(frequency)?.value())
    }

    /// Reference rate per period at `frequency`, i.e. `annual_rate / frequency`.
    pub fn rate(&self, frequency: Frequency) -> InstrumentResult<f64> {
        Ok(self.reference_rate.periodic_at(frequency)?)
    }

    /// Effective annual reference rate minus the effective annual benchmark
    /// yield for a tenor given in days.
    ///
    /// The benchmark yield compounds `360 / tenor_days` times a year, the
    /// same convention [`discount_rate`](Self::discount_rate) uses.
    ///
    /// # Errors
    ///
    /// Fails with a market data lookup error unless `tenor_days` is 28, 91
    /// or 182.
    pub fn risk_free_spread(&self, tenor_days: u32) -> InstrumentResult<f64> {
        let tenor = Tenor::from_days(tenor_days)?;
        let benchmark = equivalent_annual_interest(
            self.benchmarks.fraction(tenor),
            tenor.compounding_per_year(),
        );
        Ok(self.reference_rate.effective_annual() - benchmark)
    }

    // ---------------------------------------------------------------------
    // Projection
    // ---------------------------------------------------------------------

    /// Principal grown for `periods` periods at the reference rate
    /// re-expressed at `frequency`.
    ///
    /// Projects the original principal, independently of the maturity value.
    pub fn simulate(&self, periods: f64, frequency: Frequency) -> InstrumentResult<f64> {
        Ok(future_value(self.principal, self.rate(frequency)?, periods))
    }

    /// [`simulate`](Self::simulate) over a span given in years.
    pub fn simulate_years(&self, years: f64, frequency: Frequency) -> InstrumentResult<f64> {
        self.simulate(years * frequency.as_f64(), frequency)
    }

    /// [`simulate`](Self::simulate) over a span given in months.
    pub fn simulate_months(&self, months: f64, frequency: Frequency) -> InstrumentResult<f64> {
        self.simulate_years(months / 12.0, frequency)
    }

    // ---------------------------------------------------------------------
    // Benchmarks
    // ---------------------------------------------------------------------

    /// Replaces the benchmark table with a fresh fetch from `source`.
    ///
    /// The maturity value does not depend on the benchmark and is kept.
    pub fn refresh_benchmarks(&mut self, source: &dyn BenchmarkSource) -> InstrumentResult<()> {
        let table = source.fetch()?;
        log::info!(
            "benchmarks refreshed from {} (28d = {}%)",
            table.source(),
            table.rate(DISCOUNT_TENOR)
        );
        self.benchmarks = table;
        Ok(())
    }

    /// Serializable snapshot of the debt as of `as_of` (default: today).
    pub fn summary(&self, as_of: Option<Date>) -> InstrumentResult<DebtSummary> {
        let as_of = as_of.unwrap_or_else(Date::today);
        Ok(DebtSummary {
            issue_date: self.issue_date.to_string(),
            maturity_date: self.maturity_date.to_string(),
            as_of: as_of.to_string(),
            principal: self.principal,
            reference_rate: self.reference_rate.value(),
            frequency: self.reference_rate.frequency().periods_per_year(),
            maturity_value: self.maturity_value,
            days_to_go: self.days_to_go(Some(as_of)),
            discount_rate: self.discount_rate(Frequency::Daily)?,
            payoff_value: self.pay_debt(Some(as_of))?,
            benchmark_source: self.benchmarks.source().to_string(),
        })
    }
}

/// Point-in-time view of a [`Debt`], with dates in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    /// Issue date (`Jan 15 2024`)
    pub issue_date: String,
    /// Maturity date
    pub maturity_date: String,
    /// Valuation date
    pub as_of: String,
    /// Principal
    pub principal: f64,
    /// Reference rate, decimal fraction
    pub reference_rate: f64,
    /// Reference rate compounding periods per year
    pub frequency: u32,
    /// Amount due at maturity
    pub maturity_value: f64,
    /// Days from valuation date to maturity
    pub days_to_go: i64,
    /// Daily-compounded benchmark discount rate, annualized
    pub discount_rate: f64,
    /// Early payoff amount on the valuation date
    pub payoff_value: f64,
    /// Label of the benchmark source
    pub benchmark_source: String,
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builder for [`Debt`].
///
/// Starts from a principal of [`DEFAULT_PRINCIPAL`] at 1% compounded
/// monthly; dates and benchmarks must always be set.
#[derive(Debug, Clone)]
pub struct DebtBuilder {
    issue_date: Option<Date>,
    maturity_date: Option<Date>,
    principal: Option<f64>,
    reference_rate: Option<Rate>,
    benchmarks: Option<BenchmarkTable>,
}

impl Default for DebtBuilder {
    fn default() -> Self {
        Self {
            issue_date: None,
            maturity_date: None,
            principal: Some(DEFAULT_PRINCIPAL),
            reference_rate: Rate::new(0.01, Frequency::Monthly).ok(),
            benchmarks: None,
        }
    }
}

impl DebtBuilder {
    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: Date) -> Self {
        self.maturity_date = Some(date);
        self
    }

    /// Sets the principal.
    #[must_use]
    pub fn principal(mut self, principal: f64) -> Self {
        self.principal = Some(principal);
        self
    }

    /// Sets the reference rate.
    #[must_use]
    pub fn reference_rate(mut self, rate: Rate) -> Self {
        self.reference_rate = Some(rate);
        self
    }

    /// Sets the benchmark table.
    #[must_use]
    pub fn benchmarks(mut self, table: BenchmarkTable) -> Self {
        self.benchmarks = Some(table);
        self
    }

    /// Fetches the benchmark table from `source`.
    pub fn benchmarks_from(self, source: &dyn BenchmarkSource) -> InstrumentResult<Self> {
        Ok(self.benchmarks(source.fetch()?))
    }

    /// Builds the debt.
    pub fn build(self) -> InstrumentResult<Debt> {
        Debt::new(
            self.issue_date
                .ok_or_else(|| InstrumentError::missing_field("issue_date"))?,
            self.maturity_date
                .ok_or_else(|| InstrumentError::missing_field("maturity_date"))?,
            self.principal
                .ok_or_else(|| InstrumentError::missing_field("principal"))?,
            self.reference_rate
                .ok_or_else(|| InstrumentError::missing_field("reference_rate"))?,
            self.benchmarks
                .ok_or_else(|| InstrumentError::missing_field("benchmarks"))?,
        )
    }
}

/// Rounds an amount to cents, ties to even.
fn round_to_cents(amount: f64) -> InstrumentResult<f64> {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp(CENTS))
        .and_then(|d| d.to_f64())
        .ok_or_else(|| {
            InstrumentError::invalid_spec(format!("maturity value {amount} is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal_macros::dec;
    use tvm_analytics::functions::equivalent_rate;
    use tvm_market::{MarketDataError, StaticBenchmarkSource};

    fn cetes() -> BenchmarkTable {
        BenchmarkTable::new(dec!(10.25), dec!(10.40), dec!(10.55), "test")
    }

    fn monthly_one_percent() -> Rate {
        Rate::new(0.01, Frequency::Monthly).unwrap()
    }

    fn sample_debt() -> Debt {
        Debt::parse(
            "Jan 15 2024",
            "Jan 15 2025",
            10_000.0,
            monthly_one_percent(),
            cetes(),
        )
        .unwrap()
    }

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_maturity_value() {
        let debt = sample_debt();
        assert_eq!(debt.term_days(), 366);

        // 10102.142457... before rounding to cents
        let daily = equivalent_rate(0.01, 12.0, 360.0) / 360.0;
        let unrounded = 10_000.0 * (1.0 + daily).powf(366.0);
        assert_relative_eq!(unrounded, 10_102.142_457_950_516, epsilon = 1e-6);
        assert_eq!(debt.maturity_value(), 10_102.14);
    }

    #[test]
    fn test_same_day_maturity() {
        let debt = Debt::parse(
            "Mar 01 2024",
            "Mar 01 2024",
            500.0,
            monthly_one_percent(),
            cetes(),
        )
        .unwrap();
        assert_eq!(debt.term_days(), 0);
        assert_eq!(debt.maturity_value(), 500.0);
    }

    #[test]
    fn test_maturity_before_issue() {
        let result = Debt::parse(
            "Jan 15 2025",
            "Jan 15 2024",
            10_000.0,
            monthly_one_percent(),
            cetes(),
        );
        assert!(matches!(
            result,
            Err(InstrumentError::MaturityBeforeIssue { .. })
        ));
    }

    #[test]
    fn test_invalid_principal() {
        for principal in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Debt::new(
                date("Jan 15 2024"),
                date("Jan 15 2025"),
                principal,
                monthly_one_percent(),
                cetes(),
            );
            assert!(matches!(result, Err(InstrumentError::InvalidSpec { .. })));
        }
    }

    #[test]
    fn test_malformed_date() {
        let result = Debt::parse(
            "15/01/2024",
            "Jan 15 2025",
            10_000.0,
            monthly_one_percent(),
            cetes(),
        );
        assert!(matches!(result, Err(InstrumentError::Core(_))));
    }

    #[test]
    fn test_days_to_go() {
        let debt = sample_debt();
        assert_eq!(debt.days_to_go(Some(date("Jul 15 2024"))), 184);
        assert_eq!(debt.days_to_go(Some(date("Jan 15 2025"))), 0);
        assert_eq!(debt.days_to_go(Some(date("Jan 20 2025"))), -5);
    }

    #[test]
    fn test_days_to_go_defaults_to_today() {
        let debt = sample_debt();
        assert_eq!(
            debt.days_to_go(None),
            Date::today().days_between(&debt.maturity_date())
        );
    }

    #[test]
    fn test_discount_rate() {
        let debt = sample_debt();
        let daily = debt.discount_rate(Frequency::Daily).unwrap();
        assert_relative_eq!(
            daily,
            equivalent_rate(0.1025, 360.0 / 28.0, 360.0),
            max_relative = 1e-12
        );

        // Fewer compounding periods need a higher nominal rate
        let thirteen = Frequency::Custom(std::num::NonZeroU32::new(13).unwrap());
        assert!(debt.discount_rate(thirteen).unwrap() > daily);
        assert!(debt.discount_rate(Frequency::Annual).unwrap() > daily);
    }

    #[test]
    fn test_pay_debt() {
        let debt = sample_debt();
        let payoff = debt.pay_debt(Some(date("Jul 15 2024"))).unwrap();
        assert_relative_eq!(payoff, 9_588.515_865_296_631, epsilon = 1e-6);

        let at_maturity = debt.pay_debt(Some(date("Jan 15 2025"))).unwrap();
        assert_relative_eq!(at_maturity, debt.maturity_value(), max_relative = 1e-12);
    }

    #[test]
    fn test_annual_and_periodic_rate() {
        let debt = sample_debt();
        assert_relative_eq!(
            debt.annual_rate(Frequency::Monthly).unwrap(),
            0.01,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            debt.annual_rate(Frequency::Annual).unwrap(),
            0.010_045_960_887_181_016,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            debt.rate(Frequency::Quarterly).unwrap(),
            debt.annual_rate(Frequency::Quarterly).unwrap() / 4.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_simulate() {
        let debt = sample_debt();
        let two_years = debt.simulate(24.0, Frequency::Monthly).unwrap();
        assert_relative_eq!(two_years, 10_201.928_431_045_086, epsilon = 1e-6);
        assert_relative_eq!(
            debt.simulate_years(2.0, Frequency::Monthly).unwrap(),
            two_years,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            debt.simulate_months(24.0, Frequency::Monthly).unwrap(),
            two_years,
            max_relative = 1e-12
        );
        // The growth does not depend on the frequency it is expressed at
        assert_relative_eq!(
            debt.simulate_years(2.0, Frequency::Daily).unwrap(),
            two_years,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_risk_free_spread() {
        let debt = sample_debt();
        // CETES 28 at 10.25% compounding 360/28 times a year is 10.7541%
        // effective, against 10.0460% for 1% monthly
        assert_relative_eq!(
            debt.risk_free_spread(28).unwrap(),
            -0.097_441_147_090_739_7,
            epsilon = 1e-12
        );
        let benchmark = equivalent_annual_interest(0.1025, 360.0 / 28.0);
        assert_relative_eq!(
            debt.risk_free_spread(28).unwrap(),
            debt.reference_rate().effective_annual() - benchmark,
            max_relative = 1e-12
        );
        assert!(debt.risk_free_spread(182).unwrap() < debt.risk_free_spread(28).unwrap());
    }

    #[test]
    fn test_risk_free_spread_unsupported_tenor() {
        let result = sample_debt().risk_free_spread(364);
        assert!(matches!(
            result,
            Err(InstrumentError::MarketData(MarketDataError::TenorNotFound(364)))
        ));
    }

    #[test]
    fn test_refresh_benchmarks() {
        let mut debt = sample_debt();
        let before = debt.maturity_value();
        let source = StaticBenchmarkSource::new(BenchmarkTable::new(
            dec!(5.00),
            dec!(5.10),
            dec!(5.20),
            "refreshed",
        ));

        let old_payoff = debt.pay_debt(Some(date("Jul 15 2024"))).unwrap();
        debt.refresh_benchmarks(&source).unwrap();

        assert_eq!(debt.benchmarks().source(), "refreshed");
        assert_eq!(debt.maturity_value(), before);
        assert!(debt.pay_debt(Some(date("Jul 15 2024"))).unwrap() > old_payoff);
    }

    #[test]
    fn test_builder() {
        let debt = Debt::builder()
            .issue_date(date("Jan 15 2024"))
            .maturity_date(date("Jan 15 2025"))
            .principal(10_000.0)
            .reference_rate(monthly_one_percent())
            .benchmarks(cetes())
            .build()
            .unwrap();
        assert_relative_eq!(
            debt.maturity_value(),
            sample_debt().maturity_value(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_builder_defaults() {
        let debt = Debt::builder()
            .issue_date(date("Jan 15 2024"))
            .maturity_date(date("Jan 15 2025"))
            .benchmarks(cetes())
            .build()
            .unwrap();
        assert_eq!(debt.principal(), DEFAULT_PRINCIPAL);
        assert_eq!(debt.reference_rate(), monthly_one_percent());
        assert_eq!(debt.maturity_value(), 10_102.14);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(10_102.142_457).unwrap(), 10_102.14);
        assert_eq!(round_to_cents(0.125).unwrap(), 0.12);
        assert_eq!(round_to_cents(99.999).unwrap(), 100.0);
        assert!(round_to_cents(f64::INFINITY).is_err());
    }

    #[test]
    fn test_builder_missing_field() {
        let result = Debt::builder()
            .issue_date(date("Jan 15 2024"))
            .principal(10_000.0)
            .build();
        assert!(matches!(
            result,
            Err(InstrumentError::MissingField { field }) if field == "maturity_date"
        ));
    }

    #[test]
    fn test_summary() {
        let summary = sample_debt().summary(Some(date("Jul 15 2024"))).unwrap();
        assert_eq!(summary.issue_date, "Jan 15 2024");
        assert_eq!(summary.as_of, "Jul 15 2024");
        assert_eq!(summary.days_to_go, 184);
        assert_eq!(summary.frequency, 12);
        assert_eq!(summary.benchmark_source, "test");
        assert_relative_eq!(summary.payoff_value, 9_588.515_865_296_631, epsilon = 1e-6);
        assert_eq!(summary.maturity_value, 10_102.14);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"maturity_date\":\"Jan 15 2025\""));
    }
}
