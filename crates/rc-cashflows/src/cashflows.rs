//! Cash-flow analysis functions.
//!
//! Free functions operating on a whole leg:
//! - `npv` / `npv_after`: present value against a yield curve
//! - `bps`: basis-point sensitivity of the coupons
//! - `start_date`, `maturity_date`, `previous_cashflow_date`,
//!   `next_cashflow_date`

use crate::cashflow::CashFlow;
use rc_core::{errors::Result, Error, Real};
use rc_termstructures::YieldTermStructure;
use rc_time::Date;

const BASIS_POINT: Real = 1.0e-4;

// ── Leg queries ──────────────────────────────────────────────────────────────

/// The earliest accrual start (or payment date, for plain flows) of a leg.
pub fn start_date(leg: &[Box<dyn CashFlow>]) -> Result<Date> {
    leg.iter()
        .map(|cf| cf.as_coupon().map_or(cf.date(), |c| c.accrual_start_date()))
        .min()
        .ok_or_else(|| Error::Precondition("empty leg".into()))
}

/// The latest accrual end (or payment date, for plain flows) of a leg.
pub fn maturity_date(leg: &[Box<dyn CashFlow>]) -> Result<Date> {
    leg.iter()
        .map(|cf| cf.as_coupon().map_or(cf.date(), |c| c.accrual_end_date()))
        .max()
        .ok_or_else(|| Error::Precondition("empty leg".into()))
}

/// The date of the last cash flow that has occurred as of `ref_date`.
pub fn previous_cashflow_date(
    leg: &[Box<dyn CashFlow>],
    include_ref_date: bool,
    ref_date: Date,
) -> Option<Date> {
    leg.iter()
        .filter(|cf| cf.has_occurred(ref_date, include_ref_date))
        .map(|cf| cf.date())
        .max()
}

/// The date of the first cash flow that has not occurred as of `ref_date`.
pub fn next_cashflow_date(
    leg: &[Box<dyn CashFlow>],
    include_ref_date: bool,
    ref_date: Date,
) -> Option<Date> {
    leg.iter()
        .filter(|cf| !cf.has_occurred(ref_date, include_ref_date))
        .map(|cf| cf.date())
        .min()
}

// ── Present value ────────────────────────────────────────────────────────────

/// Net present value of every cash flow in the leg.
///
/// `Σ amount × curve.discount(payment_date)`, recomputed in full on every
/// call.
///
/// # Errors
/// [`Error::InvalidRange`](rc_core::Error::InvalidRange) if a flow is paid
/// before the curve's reference date.
pub fn npv(leg: &[Box<dyn CashFlow>], curve: &dyn YieldTermStructure) -> Result<Real> {
    leg.iter().try_fold(0.0, |acc, cf| -> Result<Real> {
        Ok(acc + cf.amount() * curve.discount_date(cf.date())?)
    })
}

/// Net present value of the flows still pending at `settlement_date`.
///
/// A flow paid on `settlement_date` itself is counted only when
/// `include_settlement_date_flows` is set.
pub fn npv_after(
    leg: &[Box<dyn CashFlow>],
    curve: &dyn YieldTermStructure,
    settlement_date: Date,
    include_settlement_date_flows: bool,
) -> Result<Real> {
    leg.iter()
        .filter(|cf| !cf.has_occurred(settlement_date, include_settlement_date_flows))
        .try_fold(0.0, |acc, cf| -> Result<Real> {
            Ok(acc + cf.amount() * curve.discount_date(cf.date())?)
        })
}

/// Basis-point sensitivity: the NPV change for a 1bp move in every coupon
/// rate, `Σ nominal × accrual_period × discount × 1e-4`.
///
/// Flows that are not coupons contribute nothing.
pub fn bps(leg: &[Box<dyn CashFlow>], curve: &dyn YieldTermStructure) -> Result<Real> {
    let total = leg
        .iter()
        .filter_map(|cf| cf.as_coupon().map(|c| (cf, c)))
        .try_fold(0.0, |acc, (cf, c)| -> Result<Real> {
            Ok(acc + c.nominal() * c.accrual_period() * curve.discount_date(cf.date())?)
        })?;
    Ok(total * BASIS_POINT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflow::{Leg, SimpleCashFlow};
    use crate::fixed_rate_coupon::FixedRateLegBuilder;
    use approx::assert_abs_diff_eq;
    use rc_termstructures::FlatForward;
    use rc_time::{Actual360, NullCalendar, Period, ScheduleBuilder, TimeUnit};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn quarterly_leg() -> Leg {
        let cal = NullCalendar;
        let schedule = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2026, 1, 15),
            Period::new(3, TimeUnit::Months),
            &cal,
        )
        .build()
        .unwrap();
        FixedRateLegBuilder::new(&schedule)
            .with_notional(1_000_000.0)
            .with_coupon_rate(0.04)
            .with_day_counter(Actual360)
            .with_redemption(true)
            .build()
            .unwrap()
    }

    #[test]
    fn npv_sums_discounted_flows() {
        let leg = quarterly_leg();
        let curve = FlatForward::new(date(2025, 1, 15), 0.03, Actual360);
        let expected: Real = leg
            .iter()
            .map(|cf| cf.amount() * curve.discount_date(cf.date()).unwrap())
            .sum();
        assert_abs_diff_eq!(npv(&leg, &curve).unwrap(), expected, epsilon = 1e-8);
    }

    #[test]
    fn npv_at_zero_rate_is_undiscounted_sum() {
        let leg = quarterly_leg();
        let curve = FlatForward::new(date(2025, 1, 15), 0.0, Actual360);
        let total: Real = leg.iter().map(|cf| cf.amount()).sum();
        assert_abs_diff_eq!(npv(&leg, &curve).unwrap(), total, epsilon = 1e-8);
    }

    #[test]
    fn npv_fails_for_flows_before_reference() {
        let leg = quarterly_leg();
        let curve = FlatForward::new(date(2025, 6, 1), 0.03, Actual360);
        assert!(matches!(npv(&leg, &curve), Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn npv_after_skips_settled_flows() {
        let leg = quarterly_leg();
        let curve = FlatForward::new(date(2025, 1, 15), 0.03, Actual360);
        let settlement = date(2025, 4, 15);
        let first = leg[0].amount() * curve.discount_date(leg[0].date()).unwrap();

        let excluding = npv_after(&leg, &curve, settlement, false).unwrap();
        let including = npv_after(&leg, &curve, settlement, true).unwrap();
        let all = npv(&leg, &curve).unwrap();
        assert_eq!(leg[0].date(), settlement);
        assert_abs_diff_eq!(including, all, epsilon = 1e-8);
        assert_abs_diff_eq!(excluding, all - first, epsilon = 1e-8);
    }

    #[test]
    fn bps_matches_rate_bump() {
        let cal = NullCalendar;
        let schedule = ScheduleBuilder::new(
            date(2025, 1, 15),
            date(2027, 1, 15),
            Period::new(6, TimeUnit::Months),
            &cal,
        )
        .build()
        .unwrap();
        let build = |rate: Real| {
            FixedRateLegBuilder::new(&schedule)
                .with_notional(100.0)
                .with_coupon_rate(rate)
                .with_day_counter(Actual360)
                .build()
                .unwrap()
        };
        let curve = FlatForward::new(date(2025, 1, 15), 0.03, Actual360);
        let base = npv(&build(0.05), &curve).unwrap();
        let bumped = npv(&build(0.0501), &curve).unwrap();
        assert_abs_diff_eq!(bps(&build(0.05), &curve).unwrap(), bumped - base, epsilon = 1e-10);
    }

    #[test]
    fn leg_dates() {
        let leg = quarterly_leg();
        assert_eq!(start_date(&leg).unwrap(), date(2025, 1, 15));
        assert_eq!(maturity_date(&leg).unwrap(), date(2026, 1, 15));

        let on = date(2025, 7, 15);
        assert_eq!(previous_cashflow_date(&leg, false, on), Some(on));
        assert_eq!(previous_cashflow_date(&leg, true, on), Some(date(2025, 4, 15)));
        assert_eq!(next_cashflow_date(&leg, false, on), Some(date(2025, 10, 15)));
        assert_eq!(next_cashflow_date(&leg, true, on), Some(on));
        assert_eq!(next_cashflow_date(&leg, false, date(2026, 2, 1)), None);
        assert_eq!(previous_cashflow_date(&leg, false, date(2024, 1, 1)), None);
    }

    #[test]
    fn plain_flows_use_payment_dates() {
        let leg: Leg = vec![
            Box::new(SimpleCashFlow::new(1.0, date(2025, 3, 1))),
            Box::new(SimpleCashFlow::new(2.0, date(2025, 1, 1))),
        ];
        assert_eq!(start_date(&leg).unwrap(), date(2025, 1, 1));
        assert_eq!(maturity_date(&leg).unwrap(), date(2025, 3, 1));
        let empty: Leg = Vec::new();
        assert!(matches!(start_date(&empty), Err(Error::Precondition(_))));
    }
}
