//! [`Price`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{
    prelude::ToPrimitive as _, Decimal, RoundingStrategy,
};
use serde::{Deserialize, Serialize};

use crate::SquareMeters;

/// Amount of money in units of ten thousand won (만원), the denomination
/// used for all listing prices.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A [`Price`] of zero.
    pub const ZERO: Self = Self(0);

    /// One hundred million won (1억), expressed in this denomination.
    const EOK: u64 = 10_000;

    /// Creates a new [`Price`] of the given amount of ten-thousand-won units.
    #[must_use]
    pub const fn new(man_won: u64) -> Self {
        Self(man_won)
    }

    /// Returns the price per [`Pyeong`] of the given area, rounded to the
    /// nearest whole unit.
    ///
    /// An area converting to exactly zero pyeong yields [`Price::ZERO`].
    ///
    /// [`Pyeong`]: crate::Pyeong
    #[must_use]
    pub fn per_pyeong(self, area: SquareMeters) -> Self {
        let pyeong = area.to_pyeong();
        if pyeong.is_zero() {
            return Self::ZERO;
        }
        Self(
            (Decimal::from(self.0) / pyeong.as_decimal())
                .round_dp_with_strategy(
                    0,
                    RoundingStrategy::MidpointAwayFromZero,
                )
                .to_u64()
                .unwrap_or(u64::MAX),
        )
    }

    /// Renders this [`Price`] in the customary `억`/`만` compound form:
    /// `12340` → `"1억 2,340만"`, `10000` → `"1억"`, `9999` → `"9,999만"`.
    #[must_use]
    pub fn formatted(self) -> String {
        if self.0 >= Self::EOK {
            let eok = self.0 / Self::EOK;
            let remainder = self.0 % Self::EOK;
            if remainder == 0 {
                format!("{eok}억")
            } else {
                format!("{eok}억 {}만", group_digits(remainder))
            }
        } else {
            format!("{}만", group_digits(self.0))
        }
    }
}

impl From<u64> for Price {
    fn from(man_won: u64) -> Self {
        Self(man_won)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|_| "invalid `Price` value")
    }
}

/// Renders the given value with a `,` separator between each group of three
/// digits.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(feature = "juniper")]
mod juniper {
    //! Module providing integration with [`juniper`] crate.

    use std::str::FromStr as _;

    use juniper::{graphql_scalar, InputValue, ScalarValue, Value};

    /// Amount of money in units of ten thousand won, as an integer string.
    #[graphql_scalar(with = Self, parse_token(String))]
    type Price = super::Price;

    impl Price {
        fn to_output<S: ScalarValue>(p: &Price) -> Value<S> {
            Value::scalar(p.to_string())
        }

        fn from_input<S: ScalarValue>(
            input: &InputValue<S>,
        ) -> Result<Self, String> {
            input
                .as_string_value()
                .ok_or_else(|| {
                    format!(
                        "Cannot parse `Price` input scalar from \
                         non-string value: {input}",
                    )
                })
                .and_then(|s| {
                    Self::from_str(s).map_err(|e| {
                        format!("Cannot parse `Price` input scalar: {e}")
                    })
                })
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Price;

    #[test]
    fn formats_below_one_eok() {
        assert_eq!(Price::new(0).formatted(), "0만");
        assert_eq!(Price::new(500).formatted(), "500만");
        assert_eq!(Price::new(9_999).formatted(), "9,999만");
    }

    #[test]
    fn formats_whole_eok_without_remainder() {
        assert_eq!(Price::new(10_000).formatted(), "1억");
        assert_eq!(Price::new(30_000).formatted(), "3억");
        assert_eq!(Price::new(120_000).formatted(), "12억");
    }

    #[test]
    fn formats_compound_amounts() {
        assert_eq!(Price::new(12_340).formatted(), "1억 2,340만");
        assert_eq!(Price::new(100_001).formatted(), "10억 1만");
        assert_eq!(Price::new(123_456).formatted(), "12억 3,456만");
    }

    #[test]
    fn per_pyeong_of_zero_area_is_zero() {
        let zero = "0".parse().unwrap();
        assert_eq!(Price::new(50_000).per_pyeong(zero), Price::ZERO);
    }

    #[test]
    fn per_pyeong_rounds_to_nearest_unit() {
        // 3305.8 ㎡ converts to exactly 1000.0 평.
        let area = "3305.8".parse().unwrap();
        assert_eq!(Price::new(12_340).per_pyeong(area), Price::new(12));

        // 33.058 ㎡ converts to 10.0 평.
        let area = "33.058".parse().unwrap();
        assert_eq!(Price::new(1_005).per_pyeong(area), Price::new(101));
    }
}
