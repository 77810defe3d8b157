//! End-to-end valuation of a one-year 5% fixed leg on a flat 3% curve.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ratecurve::cashflows::npv;
use ratecurve::prelude::*;
use std::sync::Arc;

const NOTIONAL: f64 = 1_000_000.0;
const FIXED_RATE: f64 = 0.05;
const CURVE_RATE: f64 = 0.03;

fn reference_date() -> Date {
    Date::from_ymd(2024, 10, 10).unwrap()
}

fn maturity_date() -> Date {
    Date::from_ymd(2025, 10, 10).unwrap()
}

fn schedule(frequency: Frequency) -> Schedule {
    Schedule::generate(
        reference_date(),
        maturity_date(),
        Period::from_frequency(frequency).unwrap(),
        &NullCalendar,
        BusinessDayConvention::Following,
        BusinessDayConvention::Following,
        DateGeneration::Forward,
        false,
    )
    .unwrap()
}

fn leg(schedule: &Schedule) -> Leg {
    FixedRateLegBuilder::new(schedule)
        .with_notional(NOTIONAL)
        .with_coupon_rate(FIXED_RATE)
        .with_day_counter(Actual360)
        .build()
        .unwrap()
}

struct Market {
    curve: Arc<FlatForward>,
    handle: Handle<dyn YieldTermStructure>,
}

fn market(rate: f64) -> Market {
    let curve = Arc::new(FlatForward::new(reference_date(), rate, Actual360));
    let handle = Handle::from_arc(Arc::clone(&curve) as Arc<dyn YieldTermStructure>);
    Market { curve, handle }
}

fn swap_npv(leg: Leg, handle: &Handle<dyn YieldTermStructure>) -> f64 {
    let mut swap = Swap::new(leg, Leg::new());
    swap.set_pricing_engine(Arc::new(DiscountingSwapEngine::new(handle.clone())));
    swap.npv().unwrap()
}

#[test]
fn annual_schedule_single_cashflow() {
    let s = schedule(Frequency::Annual);
    assert_eq!(s.dates(), &[reference_date(), maturity_date()]);

    let leg = leg(&s);
    assert_eq!(leg.len(), 1);
    assert_eq!(leg[0].date(), maturity_date());
    assert_abs_diff_eq!(leg[0].amount(), 50_694.444_444_444, epsilon = 1e-6);

    let m = market(CURVE_RATE);
    let df = m.curve.discount_date(maturity_date()).unwrap();
    assert_abs_diff_eq!(df, (-CURVE_RATE * 365.0 / 360.0).exp(), epsilon = 1e-15);
    assert_abs_diff_eq!(df, 0.970_041, epsilon = 1e-6);

    let expected = leg[0].amount() * df;
    assert_abs_diff_eq!(expected, 49_175.703, epsilon = 1e-3);
    assert_abs_diff_eq!(npv(&leg, m.curve.as_ref()).unwrap(), expected, epsilon = 1e-8);
    assert_abs_diff_eq!(swap_npv(leg, &m.handle), expected, epsilon = 1e-8);
}

#[test]
fn simple_compounding_variant() {
    let curve = FlatForward::new(reference_date(), CURVE_RATE, Actual360)
        .with_compounding(Compounding::Simple, Frequency::Annual);
    let leg = leg(&schedule(Frequency::Annual));
    let df = curve.discount_date(maturity_date()).unwrap();
    assert_abs_diff_eq!(df, 1.0 / (1.0 + CURVE_RATE * 365.0 / 360.0), epsilon = 1e-15);
    assert_abs_diff_eq!(npv(&leg, &curve).unwrap(), 49_198.005, epsilon = 1e-3);
}

#[test]
fn daily_schedule_covers_every_day() {
    let s = schedule(Frequency::Daily);
    // 2024-10-10 to 2025-10-10 spans 365 days (no Feb 29 inside).
    assert_eq!(s.size(), 366);
    assert_eq!(s.start_date(), Some(reference_date()));
    assert_eq!(s.end_date(), Some(maturity_date()));

    let leg = leg(&s);
    assert_eq!(leg.len(), 365);
    for cf in &leg {
        assert_abs_diff_eq!(cf.amount(), NOTIONAL * FIXED_RATE / 360.0, epsilon = 1e-9);
    }
}

#[test]
fn daily_and_annual_amounts_agree() {
    let annual = leg(&schedule(Frequency::Annual));
    let daily = leg(&schedule(Frequency::Daily));
    let total = |l: &Leg| l.iter().map(|cf| cf.amount()).sum::<f64>();
    assert_relative_eq!(total(&daily), total(&annual), max_relative = 1e-6);

    // Undiscounted, the two legs are worth the same.
    let flat = market(0.0);
    let a = swap_npv(annual, &flat.handle);
    let d = swap_npv(daily, &flat.handle);
    assert_relative_eq!(a, d, max_relative = 1e-6);
}

#[test]
fn daily_npv_exceeds_annual_when_discounting() {
    // Paying earlier is worth more under a positive rate.
    let m = market(CURVE_RATE);
    let annual = swap_npv(leg(&schedule(Frequency::Annual)), &m.handle);
    let daily = swap_npv(leg(&schedule(Frequency::Daily)), &m.handle);
    assert!(daily > annual);
    assert!(daily < annual * 1.02);
}

#[test]
fn discount_factors_along_the_schedule() {
    let m = market(CURVE_RATE);
    let s = schedule(Frequency::Daily);
    let dfs: Vec<f64> = s.dates().iter().map(|&d| m.curve.discount_date(d).unwrap()).collect();
    assert_eq!(dfs[0], 1.0);
    assert!(dfs.windows(2).all(|w| w[1] < w[0]));
    assert_abs_diff_eq!(dfs[365], m.curve.discount_date(maturity_date()).unwrap());
}

#[test]
fn discount_before_reference_date_fails() {
    let m = market(CURVE_RATE);
    let err = m.curve.discount_date(reference_date() - 1).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { .. }));
}

#[test]
fn rate_moves_reprice_bound_valuations() {
    let m = market(CURVE_RATE);
    let annual = leg(&schedule(Frequency::Annual));
    let valuation = LegValuation::bind(&annual, m.handle.clone());

    let captured_df = m.curve.discount_date(maturity_date()).unwrap();
    let before = valuation.npv().unwrap();
    m.curve.set_rate(0.04).unwrap();
    let after = valuation.npv().unwrap();

    assert!(after < before);
    assert_abs_diff_eq!(captured_df, (-CURVE_RATE * 365.0 / 360.0).exp(), epsilon = 1e-15);
    assert_abs_diff_eq!(
        after,
        annual[0].amount() * (-0.04 * 365.0 / 360.0_f64).exp(),
        epsilon = 1e-8
    );
}

#[test]
fn swap_engine_and_leg_valuation_agree() {
    let m = market(CURVE_RATE);
    let s = schedule(Frequency::Daily);
    let daily = leg(&s);
    let bound = LegValuation::bind(&daily, m.handle.clone()).npv().unwrap();
    let pure = npv(&daily, m.curve.as_ref()).unwrap();
    let engine = swap_npv(leg(&s), &m.handle);
    assert_abs_diff_eq!(bound, pure, epsilon = 1e-9);
    assert_abs_diff_eq!(engine, pure, epsilon = 1e-6);
}

#[test]
fn missing_engine_and_short_schedule() {
    let swap = Swap::new(leg(&schedule(Frequency::Annual)), Leg::new());
    assert_eq!(swap.npv(), Err(Error::MissingPricingEngine));

    let single = Schedule::from_dates(vec![reference_date()]).unwrap();
    let err = FixedRateLegBuilder::new(&single)
        .with_notional(NOTIONAL)
        .with_coupon_rate(FIXED_RATE)
        .build()
        .unwrap_err();
    assert_eq!(err, Error::InsufficientPeriods { found: 1 });
}

#[test]
fn unsupported_frequency() {
    assert!(matches!(
        Period::from_frequency(Frequency::NoFrequency),
        Err(Error::UnsupportedFrequency(_))
    ));
}
