//! Deal display formatting: discount labels and expiration countdowns.
//!
//! Pure functions over request-scoped data. The clock is always passed in
//! so callers (and tests) control "now".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Label shown when a deal has no displayable discount value.
pub const FALLBACK_LABEL: &str = "DEAL";

/// The closed set of discount kinds a deal can carry.
///
/// The kind determines which of the optional payload fields
/// (`discount_percentage`, `discount_amount`) is meaningful: exactly one
/// for `Percentage` / `FixedAmount`, neither for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealKind {
    Percentage,
    FixedAmount,
    FreeShipping,
    Bogo,
    Other,
}

impl DealKind {
    /// Wire/storage form, matching the `deal_type` column's CHECK set.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealKind::Percentage => "PERCENTAGE",
            DealKind::FixedAmount => "FIXED_AMOUNT",
            DealKind::FreeShipping => "FREE_SHIPPING",
            DealKind::Bogo => "BOGO",
            DealKind::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for DealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DealKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "PERCENTAGE" => Ok(DealKind::Percentage),
            "FIXED_AMOUNT" => Ok(DealKind::FixedAmount),
            "FREE_SHIPPING" => Ok(DealKind::FreeShipping),
            "BOGO" => Ok(DealKind::Bogo),
            "OTHER" => Ok(DealKind::Other),
            other => Err(CoreError::Validation(format!(
                "unknown deal type '{other}'"
            ))),
        }
    }
}

/// Human-readable discount label for a deal.
///
/// A zero percentage or amount renders the fallback: a zero-value discount
/// is meaningless to display, so it is treated the same as a missing one.
pub fn discount_label(
    kind: DealKind,
    percentage: Option<i32>,
    amount: Option<Decimal>,
) -> String {
    match kind {
        DealKind::Percentage => match percentage {
            Some(p) if p != 0 => format!("{p}% OFF"),
            _ => FALLBACK_LABEL.to_string(),
        },
        DealKind::FixedAmount => match amount {
            // normalize() drops the NUMERIC scale so 25.00 renders as "25".
            Some(a) if !a.is_zero() => format!("{} OFF", a.normalize()),
            _ => FALLBACK_LABEL.to_string(),
        },
        DealKind::FreeShipping => "FREE SHIPPING".to_string(),
        DealKind::Bogo => "BOGO".to_string(),
        DealKind::Other => FALLBACK_LABEL.to_string(),
    }
}

/// Whole days until a deal expires, by float ceiling over the millisecond
/// delta. Negative once the instant has passed. `None` when the deal has
/// no expiration.
///
/// Consumers branch on the stored `is_expired` flag, not the sign of this
/// value; the two can drift and this function does not reconcile them.
pub fn days_until_expiration(expiration: Option<Timestamp>, now: Timestamp) -> Option<i64> {
    const MS_PER_DAY: f64 = 86_400_000.0;
    expiration.map(|exp| ((exp - now).num_milliseconds() as f64 / MS_PER_DAY).ceil() as i64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    // -- discount_label ------------------------------------------------------

    #[test]
    fn percentage_with_value() {
        assert_eq!(
            discount_label(DealKind::Percentage, Some(20), None),
            "20% OFF"
        );
    }

    #[test]
    fn fixed_amount_with_value() {
        assert_eq!(
            discount_label(DealKind::FixedAmount, None, Some(Decimal::from(25))),
            "25 OFF"
        );
    }

    #[test]
    fn fixed_amount_drops_trailing_zeros() {
        // NUMERIC(10,2) comes back as 25.00.
        assert_eq!(
            discount_label(DealKind::FixedAmount, None, Some(Decimal::new(2500, 2))),
            "25 OFF"
        );
    }

    #[test]
    fn free_shipping_and_bogo_are_fixed_strings() {
        assert_eq!(
            discount_label(DealKind::FreeShipping, None, None),
            "FREE SHIPPING"
        );
        assert_eq!(discount_label(DealKind::Bogo, None, None), "BOGO");
    }

    #[test]
    fn zero_or_missing_values_fall_back() {
        assert_eq!(discount_label(DealKind::Percentage, Some(0), None), "DEAL");
        assert_eq!(discount_label(DealKind::Percentage, None, None), "DEAL");
        assert_eq!(
            discount_label(DealKind::FixedAmount, None, Some(Decimal::ZERO)),
            "DEAL"
        );
        assert_eq!(discount_label(DealKind::FixedAmount, None, None), "DEAL");
        assert_eq!(discount_label(DealKind::Other, None, None), "DEAL");
    }

    // -- days_until_expiration -----------------------------------------------

    #[test]
    fn no_expiration_yields_none() {
        assert_eq!(days_until_expiration(None, fixed_now()), None);
    }

    #[test]
    fn exactly_three_days_out() {
        let now = fixed_now();
        assert_eq!(
            days_until_expiration(Some(now + Duration::days(3)), now),
            Some(3)
        );
    }

    #[test]
    fn partial_days_round_up() {
        let now = fixed_now();
        let exp = now + Duration::days(2) + Duration::hours(12);
        assert_eq!(days_until_expiration(Some(exp), now), Some(3));
    }

    #[test]
    fn past_instants_are_negative() {
        let now = fixed_now();
        assert_eq!(
            days_until_expiration(Some(now - Duration::days(10)), now),
            Some(-10)
        );
        // Ceiling moves partial past days toward zero.
        let nine_and_a_half_ago = now - Duration::days(9) - Duration::hours(12);
        assert_eq!(days_until_expiration(Some(nine_and_a_half_ago), now), Some(-9));
    }

    #[test]
    fn expiring_right_now_is_zero() {
        let now = fixed_now();
        assert_eq!(days_until_expiration(Some(now), now), Some(0));
    }

    // -- DealKind ------------------------------------------------------------

    #[test]
    fn deal_kind_roundtrips_storage_form() {
        for kind in [
            DealKind::Percentage,
            DealKind::FixedAmount,
            DealKind::FreeShipping,
            DealKind::Bogo,
            DealKind::Other,
        ] {
            assert_eq!(DealKind::try_from(kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_deal_kind_is_rejected() {
        assert!(DealKind::try_from("HALF_PRICE".to_string()).is_err());
    }
}
