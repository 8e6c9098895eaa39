pub const EPSILON: f64 = 1.0e-5;

pub trait ApproxEq<Rhs = Self> {
    fn approx_eq_epsilon(&self, rhs: &Rhs, epsilon: f64) -> bool;

    fn approx_eq(&self, rhs: &Rhs) -> bool {
        self.approx_eq_epsilon(rhs, EPSILON)
    }
}

impl ApproxEq for f64 {
    fn approx_eq_epsilon(&self, rhs: &Self, epsilon: f64) -> bool {
        (self - rhs).abs() < epsilon
    }
}

#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        assert!(
            $crate::math::approx_eq::ApproxEq::approx_eq(left, right),
            "assertion failed: `left ~= right`\n  left: `{:?}`\n right: `{:?}`",
            left,
            right,
        );
    }};
}
