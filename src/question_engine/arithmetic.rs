//! Exact arithmetic and canonical number rendering.
//!
//! Answers are always rendered from exact values where the math allows it:
//! integers as integers, rationals reduced to lowest terms, and decimals rounded
//! half away from zero with integer arithmetic. Only genuinely irrational
//! values (square roots that are not perfect squares) pass through `f64`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}

/// Least common multiple of two non-zero integers.
pub fn lcm(a: i64, b: i64) -> i64 {
    (a / gcd(a, b) * b).abs()
}

/// Divide numerator and denominator by their GCD; the sign ends up on the
/// numerator. `denominator` must be non-zero.
pub fn reduce_fraction(numerator: i64, denominator: i64) -> (i64, i64) {
    debug_assert!(denominator != 0, "zero denominator");
    let g = gcd(numerator, denominator).max(1);
    let (n, d) = (numerator / g, denominator / g);
    if d < 0 { (-n, -d) } else { (n, d) }
}

/// Exact integer square root, if `n` is a perfect square.
pub fn perfect_sqrt(n: i64) -> Option<i64> {
    if n < 0 {
        return None;
    }
    let mut r = (n as f64).sqrt() as i64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    (r * r == n).then_some(r)
}

// ---------------------------------------------------------------------------
// Fraction
// ---------------------------------------------------------------------------

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        let (num, den) = reduce_fraction(numerator, denominator);
        Fraction { num, den }
    }

    pub fn integer(n: i64) -> Self {
        Fraction { num: n, den: 1 }
    }

    pub fn numer(self) -> i64 {
        self.num
    }

    pub fn denom(self) -> i64 {
        self.den
    }

    pub fn is_integer(self) -> bool {
        self.den == 1
    }

    pub fn recip(self) -> Self {
        Fraction::new(self.den, self.num)
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Decimal rendering with exactly `places` digits after the point.
    pub fn to_decimal(self, places: u32) -> String {
        format_decimal(self, places)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::integer(n)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Denominators are positive, so cross-multiplying preserves order.
        (self.num as i128 * other.den as i128).cmp(&(other.num as i128 * self.den as i128))
    }
}

impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        let den = lcm(self.den, rhs.den);
        Fraction::new(self.num * (den / self.den) + rhs.num * (den / rhs.den), den)
    }
}

impl Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Fraction) -> Fraction {
        // Cross-reduce first to keep intermediates small.
        let g1 = gcd(self.num, rhs.den).max(1);
        let g2 = gcd(rhs.num, self.den).max(1);
        Fraction::new((self.num / g1) * (rhs.num / g2), (self.den / g2) * (rhs.den / g1))
    }
}

impl Div for Fraction {
    type Output = Fraction;
    fn div(self, rhs: Fraction) -> Fraction {
        self * rhs.recip()
    }
}

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Fraction {
        Fraction { num: -self.num, den: self.den }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render an exact rational with `places` decimals, rounding half away from zero.
pub fn format_decimal(value: Fraction, places: u32) -> String {
    let scale = 10i128.pow(places);
    let scaled = value.num as i128 * scale;
    let den = value.den as i128;
    let mut q = scaled / den;
    let r = scaled % den;
    if 2 * r.abs() >= den {
        q += if scaled < 0 { -1 } else { 1 };
    }
    format_scaled_i128(q, places)
}

/// Render an integer count of `10^-places` units, e.g. `(1234, 2)` → `"12.34"`.
pub fn format_scaled(units: i64, places: u32) -> String {
    format_scaled_i128(units as i128, places)
}

fn format_scaled_i128(units: i128, places: u32) -> String {
    let sign = if units < 0 { "-" } else { "" };
    let abs = units.unsigned_abs();
    if places == 0 {
        return format!("{sign}{abs}");
    }
    let scale = 10u128.pow(places);
    format!(
        "{sign}{}.{:0width$}",
        abs / scale,
        abs % scale,
        width = places as usize
    )
}

/// Integral values render as integers, everything else with `places` decimals.
pub fn format_exact(value: Fraction, places: u32) -> String {
    if value.is_integer() {
        value.num.to_string()
    } else {
        format_decimal(value, places)
    }
}

/// Round an irrational value half away from zero and render it with
/// exactly `places` decimals.
pub fn format_rounded(value: f64, places: u32) -> String {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid "-0.00".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", places as usize, rounded)
}

/// Join several rendered values with the canonical multi-value separator.
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values.iter().map(|v| v.as_ref()).collect::<Vec<_>>().join(", ")
}

/// Render a polynomial from `(coefficient, variable-suffix)` terms, skipping
/// zero coefficients: `[(2, "x²"), (-3, "x"), (1, "")]` → `"2x² - 3x + 1"`.
pub fn polynomial(terms: &[(i64, &str)]) -> String {
    let mut out = String::new();
    for &(coef, var) in terms.iter().filter(|(c, _)| *c != 0) {
        let magnitude = coef.abs();
        let body = if magnitude == 1 && !var.is_empty() {
            var.to_string()
        } else {
            format!("{magnitude}{var}")
        };
        if out.is_empty() {
            if coef < 0 {
                out.push('-');
            }
        } else {
            out.push_str(if coef < 0 { " - " } else { " + " });
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Parenthesise negative numbers for use inside an expression, e.g. `(-3)`.
pub fn paren(n: i64) -> String {
    if n < 0 { format!("({n})") } else { n.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_fraction_examples() {
        assert_eq!(reduce_fraction(4, 8), (1, 2));
        assert_eq!(reduce_fraction(6, -9), (-2, 3));
        assert_eq!(reduce_fraction(-6, -9), (2, 3));
        assert_eq!(reduce_fraction(0, 5), (0, 1));
        assert_eq!(reduce_fraction(7, 1), (7, 1));
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(7, 3), 21);
    }

    #[test]
    fn fraction_arithmetic_stays_reduced() {
        let a = Fraction::new(1, 6);
        let b = Fraction::new(1, 3);
        assert_eq!(a + b, Fraction::new(1, 2));
        assert_eq!(a - b, Fraction::new(-1, 6));
        assert_eq!(a * b, Fraction::new(1, 18));
        assert_eq!(a / b, Fraction::new(1, 2));
        assert_eq!((b / a).to_string(), "2");
        assert_eq!(Fraction::new(3, -12).to_string(), "-1/4");
    }

    #[test]
    fn fraction_ordering() {
        assert!(Fraction::new(1, 3) < Fraction::new(1, 2));
        assert!(Fraction::new(-1, 2) < Fraction::new(-1, 3));
    }

    #[test]
    fn decimal_rounding_is_half_away_from_zero() {
        assert_eq!(format_decimal(Fraction::new(1, 8), 2), "0.13");
        assert_eq!(format_decimal(Fraction::new(-1, 8), 2), "-0.13");
        assert_eq!(format_decimal(Fraction::new(5, 2), 0), "3");
        assert_eq!(format_decimal(Fraction::new(2, 3), 4), "0.6667");
        assert_eq!(format_decimal(Fraction::integer(10), 1), "10.0");
        assert_eq!(format_decimal(Fraction::new(-1, 1000), 2), "0.00");
    }

    #[test]
    fn exact_rendering_prefers_integers() {
        assert_eq!(format_exact(Fraction::integer(10), 2), "10");
        assert_eq!(format_exact(Fraction::new(25, 2), 2), "12.50");
        assert_eq!(format_exact(Fraction::new(-3, 2), 1), "-1.5");
    }

    #[test]
    fn scaled_and_rounded_rendering() {
        assert_eq!(format_scaled(1234, 2), "12.34");
        assert_eq!(format_scaled(5, 2), "0.05");
        assert_eq!(format_scaled(-75, 1), "-7.5");
        assert_eq!(format_rounded(2f64.sqrt(), 2), "1.41");
        assert_eq!(format_rounded(-0.001, 2), "0.00");
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(perfect_sqrt(0), Some(0));
        assert_eq!(perfect_sqrt(49), Some(7));
        assert_eq!(perfect_sqrt(50), None);
        assert_eq!(perfect_sqrt(-4), None);
    }

    #[test]
    fn polynomial_rendering() {
        assert_eq!(polynomial(&[(1, "x²"), (-5, "x"), (6, "")]), "x² - 5x + 6");
        assert_eq!(polynomial(&[(2, "x²"), (0, "x"), (-1, "")]), "2x² - 1");
        assert_eq!(polynomial(&[(-1, "x"), (3, "")]), "-x + 3");
        assert_eq!(polynomial(&[(0, "x"), (0, "")]), "0");
    }
}
