//! Equated monthly installment calculation for the loan planner.

/// Computes the EMI for a loan of `principal`, at `annual_rate_percent`
/// nominal interest, repaid over `tenure_years`.
///
/// With monthly rate `r = annual_rate_percent / 12 / 100` and
/// `t = tenure_years * 12` payments:
///
/// * `r > 0, t > 0`: `P * r * (1+r)^t / ((1+r)^t - 1)`
/// * `r == 0, t > 0`: straight-line `P / t`
/// * `t == 0`: `0`
pub fn monthly_installment(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> f64 {
    let rate = annual_rate_percent / 12.0 / 100.0;
    let tenure = tenure_years * 12;

    if tenure == 0 {
        return 0.0;
    }
    if rate > 0.0 {
        let compounded = (1.0 + rate).powi(tenure as i32);
        (principal * rate * compounded) / (compounded - 1.0)
    } else {
        principal / f64::from(tenure)
    }
}
