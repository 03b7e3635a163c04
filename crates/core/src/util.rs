/// `sqrt(3)`. The std constant for this is still unstable.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Tolerance used for all fractional coordinate comparisons. Fractional
/// points come out of matrix math, so exact float equality is meaningless.
pub const EPSILON: f64 = 1e-5;

/// Are these two floats within [EPSILON] of each other?
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
