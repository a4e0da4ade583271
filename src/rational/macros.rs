/// Shorthand for creating a rational number in tests.
///
/// With a single argument, the value is converted through `f64`, so keep it small or exactly
/// representable.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        <$crate::Rational as ::std::convert::TryFrom<f64>>::try_from($value as f64).unwrap()
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Rational::new($numerator, $denominator).unwrap()
    };
}
