//! Fixed-payment amortization arithmetic

use crate::profile::PaymentFrequency;
use serde::{Deserialize, Serialize};

/// Periodic rate and number of payments for a term and frequency
///
/// Monthly: (rate/12, years×12); bimonthly: (rate/6, years×6); annual: (rate, years).
/// Fractional period counts round to the nearest whole payment.
pub fn period_parameters(annual_rate: f64, years: f64, frequency: PaymentFrequency) -> (f64, u32) {
    let per_year = frequency.periods_per_year() as f64;
    let periods = (years * per_year).round().max(0.0) as u32;
    (annual_rate / per_year, periods)
}

/// Level payment that fully repays `principal` over `periods` payments.
///
/// Uses `P × r(1+r)^n / ((1+r)^n − 1)` when both the rate and the period count
/// are positive, and straight-line `P / max(n, 1)` otherwise.
pub fn periodic_payment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate > 0.0 && periods > 0 {
        let growth = (1.0 + periodic_rate).powi(periods as i32);
        principal * periodic_rate * growth / (growth - 1.0)
    } else {
        principal / periods.max(1) as f64
    }
}

/// One row of the payment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-indexed payment number
    pub period: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance remaining after this payment
    pub balance: f64,
}

/// Period-by-period split of each payment into interest and principal
pub fn amortization_schedule(
    principal: f64,
    periodic_rate: f64,
    periods: u32,
    payment: f64,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = principal;

    for period in 1..=periods {
        let interest = if periodic_rate > 0.0 {
            balance * periodic_rate
        } else {
            0.0
        };
        let mut principal_paid = payment - interest;
        // Absorb float drift on the final payment
        if period == periods {
            principal_paid = balance;
        }
        balance -= principal_paid;

        rows.push(ScheduleRow {
            period,
            payment: interest + principal_paid,
            interest,
            principal: principal_paid,
            balance,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_period_parameters() {
        let (r, n) = period_parameters(0.12, 3.0, PaymentFrequency::Monthly);
        assert_relative_eq!(r, 0.01);
        assert_eq!(n, 36);

        let (r, n) = period_parameters(0.12, 3.0, PaymentFrequency::Bimonthly);
        assert_relative_eq!(r, 0.02);
        assert_eq!(n, 18);

        let (r, n) = period_parameters(0.12, 3.0, PaymentFrequency::Annual);
        assert_eq!(r, 0.12);
        assert_eq!(n, 3);

        let (_, n) = period_parameters(0.12, 0.5, PaymentFrequency::Monthly);
        assert_eq!(n, 6);
    }

    #[test]
    fn test_standard_payment() {
        // 100,000 at 1% per month over 12 months
        let payment = periodic_payment(100_000.0, 0.01, 12);
        assert_abs_diff_eq!(payment, 8_884.88, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(periodic_payment(850_000.0, 0.0, 36), 850_000.0 / 36.0);
    }

    #[test]
    fn test_zero_periods_does_not_divide_by_zero() {
        assert_eq!(periodic_payment(850_000.0, 0.01, 0), 850_000.0);
        assert_eq!(periodic_payment(850_000.0, 0.0, 0), 850_000.0);
    }

    #[test]
    fn test_schedule_repays_principal() {
        let principal = 850_000.0;
        let payment = periodic_payment(principal, 0.121 / 12.0, 36);
        let rows = amortization_schedule(principal, 0.121 / 12.0, 36, payment);

        assert_eq!(rows.len(), 36);
        assert_eq!(rows[35].balance, 0.0);
        let repaid: f64 = rows.iter().map(|r| r.principal).sum();
        assert_relative_eq!(repaid, principal, epsilon = 1e-6);
        // Interest share shrinks as the balance falls
        assert!(rows[0].interest > rows[35].interest);
        assert_abs_diff_eq!(rows[35].payment, payment, epsilon = 1e-4);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let rows = amortization_schedule(1_200.0, 0.0, 12, 100.0);
        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert_abs_diff_eq!(rows[11].balance, 0.0);
    }
}
