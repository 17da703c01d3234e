//! Wire-format primitives shared by the V2 resource records.
//!
//! The V2 API has a few conventions that don't map directly onto serde
//! defaults:
//!
//! - dates are RFC 1123 strings with a numeric zone
//!   (`Tue, 20 Nov 2012 00:00:00 +0000`), sometimes empty;
//! - money amounts are decimal strings (`"12.9500"`);
//! - a handful of fields (external IDs, credit card type) are untyped and
//!   may be absent, JSON `null`, or an actual value.
//!
//! This module provides the adapters for all three.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A date in the V2 API's wire format.
///
/// Wraps a [`chrono::DateTime<FixedOffset>`] and (de)serializes it as an
/// RFC 1123 string with a numeric zone, which is what the API produces
/// and what date-bound query filters must emit.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::BcDate;
///
/// let date: BcDate = serde_json::from_str(r#""Tue, 20 Nov 2012 00:00:00 +0000""#).unwrap();
/// assert_eq!(date.to_string(), "Tue, 20 Nov 2012 00:00:00 +0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcDate(DateTime<FixedOffset>);

impl BcDate {
    /// Parses a date from the API's textual format.
    ///
    /// # Errors
    ///
    /// Returns a [`chrono::ParseError`] if the input is not an RFC 1123
    /// date with a numeric zone.
    pub fn parse(input: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc2822(input).map(Self)
    }

    /// Returns the wrapped timestamp.
    #[must_use]
    pub const fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for BcDate {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl fmt::Display for BcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc2822())
    }
}

impl Serialize for BcDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc2822())
    }
}

impl<'de> Deserialize<'de> for BcDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Option<BcDate>` fields.
///
/// The API represents "no date" as a missing key, `null`, or an empty
/// string; all three decode to `None`.
pub(crate) mod optional_date {
    use super::BcDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<BcDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.datetime().to_rfc2822()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BcDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => BcDate::parse(&raw).map(Some).map_err(de::Error::custom),
        }
    }
}

/// Serde adapter for money fields.
///
/// The API sends amounts as decimal strings (`"12.9500"`); older payloads
/// occasionally carry bare numbers. Both decode to `f64`, and an empty
/// string decodes to zero. Serialization mirrors the string form.
pub(crate) mod money {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) if text.is_empty() => Ok(0.0),
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

/// A value the API leaves untyped.
///
/// Some fields (nullable external IDs, `credit_card_type`) are declared
/// without a shape and may be missing, explicitly `null`, or carry a
/// value. `Maybe` keeps those three states distinct instead of collapsing
/// them into an untyped hole.
///
/// A field of this type should be declared with
/// `#[serde(default, skip_serializing_if = "Maybe::is_absent")]` so that
/// a missing key decodes to [`Maybe::Absent`] and round-trips back to a
/// missing key.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::Maybe;
///
/// let present: Maybe<String> = serde_json::from_str(r#""amazon""#).unwrap();
/// assert_eq!(present, Maybe::Value("amazon".to_string()));
///
/// let null: Maybe<String> = serde_json::from_str("null").unwrap();
/// assert_eq!(null, Maybe::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Maybe<T> {
    /// The key was not present in the payload.
    #[default]
    Absent,
    /// The key was present with an explicit `null`.
    Null,
    /// The key was present with a value.
    Value(T),
}

impl<T> Maybe<T> {
    /// Returns `true` if the key was missing from the payload.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the contained value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            // Absent is normally skipped at the field level; if it is
            // serialized anyway it degrades to null.
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bc_date_parses_rfc1123_with_numeric_zone() {
        let date = BcDate::parse("Tue, 20 Nov 2012 00:00:00 +0000").unwrap();
        assert_eq!(date.to_string(), "Tue, 20 Nov 2012 00:00:00 +0000");
    }

    #[test]
    fn test_bc_date_rejects_other_formats() {
        assert!(BcDate::parse("2012-11-20T00:00:00Z").is_err());
        assert!(BcDate::parse("").is_err());
    }

    #[test]
    fn test_bc_date_serde_round_trip() {
        let date: BcDate =
            serde_json::from_str(r#""Fri, 15 Aug 2014 23:02:40 +0000""#).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""Fri, 15 Aug 2014 23:02:40 +0000""#);
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    struct DateHolder {
        #[serde(
            default,
            with = "optional_date",
            skip_serializing_if = "Option::is_none"
        )]
        date_shipped: Option<BcDate>,
    }

    #[test]
    fn test_optional_date_treats_empty_string_as_none() {
        let holder: DateHolder = serde_json::from_str(r#"{"date_shipped": ""}"#).unwrap();
        assert!(holder.date_shipped.is_none());
    }

    #[test]
    fn test_optional_date_treats_missing_key_as_none() {
        let holder: DateHolder = serde_json::from_str("{}").unwrap();
        assert!(holder.date_shipped.is_none());
    }

    #[test]
    fn test_optional_date_parses_value() {
        let holder: DateHolder =
            serde_json::from_str(r#"{"date_shipped": "Tue, 20 Nov 2012 00:00:00 +0000"}"#)
                .unwrap();
        assert!(holder.date_shipped.is_some());
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    struct MoneyHolder {
        #[serde(default, with = "money")]
        total_inc_tax: f64,
    }

    #[test]
    fn test_money_decodes_from_string() {
        let holder: MoneyHolder =
            serde_json::from_str(r#"{"total_inc_tax": "12.9500"}"#).unwrap();
        assert!((holder.total_inc_tax - 12.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_money_decodes_from_number() {
        let holder: MoneyHolder = serde_json::from_str(r#"{"total_inc_tax": 7.5}"#).unwrap();
        assert!((holder.total_inc_tax - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_money_empty_string_is_zero() {
        let holder: MoneyHolder = serde_json::from_str(r#"{"total_inc_tax": ""}"#).unwrap();
        assert!(holder.total_inc_tax.abs() < f64::EPSILON);
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    struct MaybeHolder {
        #[serde(default, skip_serializing_if = "Maybe::is_absent")]
        external_id: Maybe<String>,
    }

    #[test]
    fn test_maybe_distinguishes_absent_null_and_value() {
        let absent: MaybeHolder = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.external_id, Maybe::Absent);

        let null: MaybeHolder = serde_json::from_str(r#"{"external_id": null}"#).unwrap();
        assert_eq!(null.external_id, Maybe::Null);

        let value: MaybeHolder = serde_json::from_str(r#"{"external_id": "amz-1"}"#).unwrap();
        assert_eq!(value.external_id, Maybe::Value("amz-1".to_string()));
    }

    #[test]
    fn test_maybe_absent_is_skipped_on_serialize() {
        let holder = MaybeHolder {
            external_id: Maybe::Absent,
        };
        assert_eq!(serde_json::to_string(&holder).unwrap(), "{}");

        let holder = MaybeHolder {
            external_id: Maybe::Null,
        };
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"external_id":null}"#
        );
    }
}
