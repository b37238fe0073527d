/// Undoes the 4-decimal scaling of the radicand: sqrt(10^4) = 10^2.
pub const SQRT_RESCALE: i128 = 100;

/// Integer square root of a 4-decimal fixed-point amount, kept in the same
/// 4-decimal domain. Zero and sub-unit inputs collapse to zero.
pub fn isqrt_scaled(amount: i128) -> i128 {
    isqrt(amount) * SQRT_RESCALE
}

/// Babylonian iteration on the raw magnitude. The estimate sequence is
/// non-increasing after the first step, so the loop terminates at the
/// integer floor without oscillating.
fn isqrt(n: i128) -> i128 {
    if n <= 0 {
        return 0;
    }

    let mut x = n;
    let mut y = (x + 1) / 2;

    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }

    x
}

/// Lock duration shrinks as collateral grows: well-collateralized pools get
/// their drawn tokens back sooner.
pub fn lock_duration_secs(coefficient: i128, collateral: i128) -> u64 {
    let root = isqrt_scaled(collateral);
    ((coefficient * 100_000) / root) as u64
}
