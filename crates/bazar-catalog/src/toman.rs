//! Toman price type and discount math.
//!
//! Prices are whole toman stored as integers; there are no sub-unit
//! amounts in this currency, so integer arithmetic covers everything
//! except the discount rounding step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in whole toman.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Toman {
    /// Amount in whole toman.
    pub amount: i64,
}

impl Toman {
    /// Create a new amount.
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format for display, e.g. "1,250,000 تومان".
    ///
    /// Negative amounts clamp to zero at display time; they can only come
    /// from arithmetic on already-degraded data and a negative price is
    /// never meaningful on a card.
    pub fn display(&self) -> String {
        format!("{} تومان", group_thousands(self.amount.max(0)))
    }
}

impl fmt::Display for Toman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// The price pair shown for a product.
///
/// When there is no discount, `old_price` is zero and only `new_price`
/// is rendered. When there is one, `old_price` carries the base price
/// and `new_price` the discounted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalPrice {
    pub old_price: Toman,
    pub new_price: Toman,
}

impl FinalPrice {
    /// Apply a discount percentage to a base price.
    ///
    /// The discounted amount rounds half away from zero, which for
    /// non-negative prices is the same rounding the original storefront
    /// applied.
    pub fn compute(price: Toman, discount_percent: u8) -> Self {
        if discount_percent == 0 {
            return Self {
                old_price: Toman::zero(),
                new_price: price,
            };
        }

        let remaining = u32::from(100 - discount_percent.min(100));
        let discounted = (price.amount as f64 * f64::from(remaining) / 100.0).round() as i64;

        Self {
            old_price: price,
            new_price: Toman::new(discounted),
        }
    }

    /// Whether this pair represents a discounted price.
    pub fn is_discounted(&self) -> bool {
        !self.old_price.is_zero()
    }
}

/// Group an amount with thousands separators, e.g. 1250000 -> "1,250,000".
fn group_thousands(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
