//! Loan estimate for the vehicle detail page
//!
//! Fixed-rate amortization in `rust_decimal` arithmetic (28 significant
//! digits). Every currency amount is rounded half-up to a whole unit. Inputs
//! outside the usable domain produce an all-zero estimate instead of an error.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use serde::Serialize;

use crate::models::FinancingDetail;

/// Terms applied to a listing's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    /// Annual interest rate percentage
    pub rate_percent: Decimal,
    /// Deposit percentage, 0-100
    pub deposit_percent: Decimal,
    pub period_months: i64,
}

impl LoanTerms {
    pub const DEFAULT_RATE_PERCENT: Decimal = Decimal::from_parts(175, 0, 0, false, 1);
    pub const DEFAULT_DEPOSIT_PERCENT: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
    pub const DEFAULT_PERIOD_MONTHS: i64 = 24;

    /// Listing overrides where present, house defaults otherwise
    ///
    /// An inactive detail contributes nothing.
    pub fn for_detail(detail: Option<&FinancingDetail>) -> Self {
        let detail = detail.filter(|d| d.is_active);
        Self {
            rate_percent: detail
                .and_then(|d| d.loan_rate)
                .unwrap_or(Self::DEFAULT_RATE_PERCENT),
            deposit_percent: detail
                .and_then(|d| d.loan_deposit_percent)
                .unwrap_or(Self::DEFAULT_DEPOSIT_PERCENT),
            period_months: detail
                .and_then(|d| d.loan_period_months)
                .unwrap_or(Self::DEFAULT_PERIOD_MONTHS),
        }
    }
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self::for_detail(None)
    }
}

/// Computed estimate, echoing the terms it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanSummary {
    pub deposit_amount: Decimal,
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub period_months: i64,
    pub rate_percent: Decimal,
    pub deposit_percent: Decimal,
}

impl LoanSummary {
    fn zero(terms: &LoanTerms) -> Self {
        Self {
            deposit_amount: Decimal::ZERO,
            loan_amount: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            period_months: terms.period_months,
            rate_percent: terms.rate_percent,
            deposit_percent: terms.deposit_percent,
        }
    }
}

/// Estimate deposit, principal and monthly installment for a price
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use todde_common::financing::{estimate, LoanTerms};
///
/// let terms = LoanTerms {
///     rate_percent: Decimal::ZERO,
///     deposit_percent: Decimal::ZERO,
///     period_months: 10,
/// };
/// let summary = estimate(Some(Decimal::from(1_000_000)), &terms);
/// assert_eq!(summary.loan_amount, Decimal::from(1_000_000));
/// assert_eq!(summary.monthly_payment, Decimal::from(100_000));
/// ```
pub fn estimate(price: Option<Decimal>, terms: &LoanTerms) -> LoanSummary {
    let price = match price {
        Some(price) if price > Decimal::ZERO && terms.period_months > 0 => price,
        _ => return LoanSummary::zero(terms),
    };

    match amortize(price, terms) {
        Some((deposit_amount, loan_amount, monthly_payment)) => LoanSummary {
            deposit_amount,
            loan_amount,
            monthly_payment,
            period_months: terms.period_months,
            rate_percent: terms.rate_percent,
            deposit_percent: terms.deposit_percent,
        },
        None => {
            tracing::warn!(
                price = %price,
                rate = %terms.rate_percent,
                months = terms.period_months,
                "Loan estimate overflowed decimal range"
            );
            LoanSummary::zero(terms)
        }
    }
}

/// (deposit, principal, installment); `None` on decimal overflow
fn amortize(price: Decimal, terms: &LoanTerms) -> Option<(Decimal, Decimal, Decimal)> {
    let hundred = Decimal::ONE_HUNDRED;
    let months = Decimal::from(terms.period_months);

    let deposit_amount = whole_units(price.checked_mul(terms.deposit_percent)?.checked_div(hundred)?);
    let loan_amount = whole_units(price.checked_sub(deposit_amount)?);

    let rate_per_month = terms
        .rate_percent
        .checked_div(hundred)?
        .checked_div(Decimal::from(12))?;

    let monthly_payment = if rate_per_month <= Decimal::ZERO {
        whole_units(loan_amount.checked_div(months)?)
    } else {
        let exponent = u64::try_from(terms.period_months).ok()?;
        let factor = (Decimal::ONE + rate_per_month).checked_powu(exponent)?;
        // ratio first: loan * rate * factor leaves Decimal range on long terms
        let ratio = rate_per_month
            .checked_mul(factor)?
            .checked_div(factor.checked_sub(Decimal::ONE)?)?;
        whole_units(loan_amount.checked_mul(ratio)?)
    };

    Some((deposit_amount, loan_amount, monthly_payment))
}

/// Round half-up (away from zero) to a whole currency unit
fn whole_units(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn terms(rate: &str, deposit: &str, months: i64) -> LoanTerms {
        LoanTerms {
            rate_percent: dec(rate),
            deposit_percent: dec(deposit),
            period_months: months,
        }
    }

    #[test]
    fn test_default_terms() {
        let t = LoanTerms::default();
        assert_eq!(t.rate_percent, dec("17.5"));
        assert_eq!(t.deposit_percent, dec("30"));
        assert_eq!(t.period_months, 24);
    }

    #[test]
    fn test_detail_overrides_and_inactive_detail() {
        let detail = FinancingDetail {
            loan_rate: Some(dec("18.0")),
            loan_period_months: Some(30),
            is_active: true,
            ..Default::default()
        };
        let t = LoanTerms::for_detail(Some(&detail));
        assert_eq!(t.rate_percent, dec("18.0"));
        assert_eq!(t.deposit_percent, dec("30"));
        assert_eq!(t.period_months, 30);

        let inactive = FinancingDetail { is_active: false, ..detail };
        assert_eq!(LoanTerms::for_detail(Some(&inactive)), LoanTerms::default());
    }

    #[test]
    fn test_amortized_reference_example() {
        let summary = estimate(Some(dec("17800000")), &terms("17.5", "30", 24));
        assert_eq!(summary.deposit_amount, dec("5340000"));
        assert_eq!(summary.loan_amount, dec("12460000"));
        assert_eq!(summary.monthly_payment, dec("619048"));
        assert_eq!(summary.period_months, 24);
        assert_eq!(summary.rate_percent, dec("17.5"));
    }

    #[test]
    fn test_amortized_thirty_month_term() {
        let summary = estimate(Some(dec("25000000")), &terms("18.0", "30", 30));
        assert_eq!(summary.deposit_amount, dec("7500000"));
        assert_eq!(summary.loan_amount, dec("17500000"));
        assert_eq!(summary.monthly_payment, dec("728686"));
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let summary = estimate(Some(dec("1000000")), &terms("0", "0", 10));
        assert_eq!(summary.deposit_amount, Decimal::ZERO);
        assert_eq!(summary.loan_amount, dec("1000000"));
        assert_eq!(summary.monthly_payment, dec("100000"));
    }

    #[test]
    fn test_deposit_rounds_half_up() {
        // 1001 * 50% = 500.5 -> 501
        let summary = estimate(Some(dec("1001")), &terms("0", "50", 1));
        assert_eq!(summary.deposit_amount, dec("501"));
        assert_eq!(summary.loan_amount, dec("500"));
    }

    #[test]
    fn test_degenerate_inputs_yield_zero() {
        for summary in [
            estimate(Some(Decimal::ZERO), &terms("17.5", "30", 24)),
            estimate(Some(dec("-5")), &terms("17.5", "30", 24)),
            estimate(None, &terms("17.5", "30", 24)),
            estimate(Some(dec("1000000")), &terms("17.5", "30", 0)),
            estimate(Some(dec("1000000")), &terms("17.5", "30", -6)),
        ] {
            assert_eq!(summary.deposit_amount, Decimal::ZERO);
            assert_eq!(summary.loan_amount, Decimal::ZERO);
            assert_eq!(summary.monthly_payment, Decimal::ZERO);
        }
    }

    #[test]
    fn test_long_high_rate_term_stays_in_range() {
        // (1 + 0.083325)^600 is about 7.2e20; the product with the principal
        // would not fit in a Decimal
        let summary = estimate(Some(dec("99999999999")), &terms("99.99", "0", 600));
        assert_eq!(summary.loan_amount, dec("99999999999"));
        assert_eq!(summary.monthly_payment, dec("8332500000"));
    }
}
