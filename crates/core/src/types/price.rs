//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored with exactly two fractional digits, the way a
//! `numeric(10, 2)` column holds them, and travel over the wire as strings
//! (`"19.99"`) so no precision is lost in JSON clients.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of fractional digits kept on every price.
pub const PRICE_SCALE: u32 = 2;

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price '{0}'")]
    Invalid(String),

    /// The input has more fractional digits than a price can hold.
    #[error("price '{0}' has more than {PRICE_SCALE} decimal places")]
    TooPrecise(String),
}

/// A catalog price in the store currency (Iraqi dinar).
///
/// ## Examples
///
/// ```
/// use mark_store_core::Price;
///
/// let price: Price = "19.9".parse().unwrap();
/// assert_eq!(price.to_string(), "19.90");
/// assert!("19.999".parse::<Price>().is_err());
/// assert_eq!(Price::from_whole(5000).grouped(), "5,000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// Largest price a `numeric(10, 2)` column can hold: `99999999.99`.
    pub const MAX: Self = Self(Decimal::from_parts(1_410_065_407, 2, 0, false, PRICE_SCALE));

    /// Create a price, rounding to two fractional digits (midpoint away from zero).
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        let mut rounded =
            amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(PRICE_SCALE);
        Self(rounded)
    }

    /// Create a price from an amount with at most two fractional digits.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::TooPrecise` instead of rounding extra digits away.
    pub fn exact(amount: Decimal) -> Result<Self, PriceError> {
        if amount.normalize().scale() > PRICE_SCALE {
            return Err(PriceError::TooPrecise(amount.to_string()));
        }
        Ok(Self::new(amount))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_whole(units: i64) -> Self {
        Self::new(Decimal::from(units))
    }

    /// A zero price.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the price is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Price of `quantity` units at this unit price, or `None` on overflow.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self::new)
    }

    /// Sum of two prices, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self::new)
    }

    /// Sum of all prices, or `None` if any step overflows.
    #[must_use]
    pub fn checked_sum(prices: impl IntoIterator<Item = Self>) -> Option<Self> {
        prices
            .into_iter()
            .try_fold(Self::zero(), |total, price| total.checked_add(price))
    }

    /// Format with thousands separators and without trailing zeros.
    ///
    /// This is the human-facing form used in order notifications:
    /// `5000.00` becomes `5,000` and `1234.50` becomes `1,234.5`.
    #[must_use]
    pub fn grouped(&self) -> String {
        let normalized = self.0.normalize();
        let text = normalized.abs().to_string();
        let (whole, fraction) = text
            .split_once('.')
            .map_or((text.as_str(), None), |(w, f)| (w, Some(f)));

        let mut out = String::with_capacity(text.len() + whole.len() / 3 + 1);
        if normalized.is_sign_negative() && !normalized.is_zero() {
            out.push('-');
        }
        let digits = whole.len();
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_string()))?;
        Self::exact(amount)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

/// Accepts both `"19.99"` and `19.99`.
struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal price as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Price::from_whole(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Price::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        let amount =
            Decimal::try_from(v).map_err(|_| E::custom(PriceError::Invalid(v.to_string())))?;
        Price::exact(amount).map_err(E::custom)
    }
}
