//! Area units and conversions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Area in square meters.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct SquareMeters(Decimal);

impl SquareMeters {
    /// Creates a new [`SquareMeters`] if the given `value` is non-negative.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value >= Decimal::ZERO).then_some(Self(value))
    }

    /// Creates a new [`SquareMeters`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be non-negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts this area into [`Pyeong`], rounded to one decimal place.
    #[must_use]
    pub fn to_pyeong(self) -> Pyeong {
        Pyeong((self.0 / one_pyeong()).round_dp_with_strategy(
            1,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Returns the raw [`Decimal`] value of this area.
    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl FromStr for SquareMeters {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `SquareMeters` value")
    }
}

/// Area in pyeong (1평 = 3.3058 ㎡), the traditional unit shown alongside
/// square meters.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct Pyeong(Decimal);

impl Pyeong {
    /// Returns the raw [`Decimal`] value of this area.
    #[must_use]
    pub const fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Indicates whether this area is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<u32> for Pyeong {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl FromStr for Pyeong {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .map(Self)
            .map_err(|_| "invalid `Pyeong` value")
    }
}

/// Returns one pyeong expressed in square meters.
fn one_pyeong() -> Decimal {
    Decimal::new(3_3058, 4)
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Area in square meters, as a decimal string.
    #[graphql_scalar(with = Self, parse_token(String))]
    type SquareMeters = super::SquareMeters;

    impl SquareMeters {
        fn to_output<S: ScalarValue>(a: &SquareMeters) -> Value<S> {
            Value::scalar(a.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `SquareMeters` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `SquareMeters` input scalar: {e}")
                    })
                })
        }
    }

    /// Area in pyeong, as a decimal string with one fractional digit.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Pyeong = super::Pyeong;

    impl Pyeong {
        fn to_output<S: ScalarValue>(a: &Pyeong) -> Value<S> {
            Value::scalar(a.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Pyeong` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Pyeong` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use super::SquareMeters;

    fn sqm(s: &str) -> SquareMeters {
        s.parse().unwrap()
    }

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn converts_to_pyeong() {
        assert_eq!(sqm("3305.8").to_pyeong().as_decimal(), decimal("1000.0"));
        assert_eq!(sqm("3.3058").to_pyeong().as_decimal(), decimal("1.0"));
        assert_eq!(sqm("0").to_pyeong().as_decimal(), decimal("0.0"));
    }

    #[test]
    fn rounds_to_one_decimal_place() {
        // 100 / 3.3058 = 30.24986...
        assert_eq!(sqm("100").to_pyeong().as_decimal(), decimal("30.2"));
        // 1000 / 3.3058 = 302.49864...
        assert_eq!(sqm("1000").to_pyeong().as_decimal(), decimal("302.5"));
    }

    #[test]
    fn conversion_is_monotonic() {
        let points = ["0", "1", "3.3058", "100", "1652.9", "3305.8", "99999"];
        let converted: Vec<_> =
            points.iter().map(|p| sqm(p).to_pyeong()).collect();
        for pair in converted.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn rejects_negative_values() {
        assert!(SquareMeters::new(decimal("-1")).is_none());
        assert!("-0.5".parse::<SquareMeters>().is_err());
    }
}
