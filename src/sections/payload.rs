//! Typed views over the freeform `data` payload of a section.
//!
//! Each renderer names the payload it expects. Fields are optional and
//! default when missing, so a partially authored section still renders
//! whatever it has. A payload with the wrong structure (an array where an
//! object belongs, a string where `items` should be a list) fails with
//! [`PayloadError`] instead.
//!
//! List items are read one at a time. An item that cannot be read is set
//! aside in [`ItemsPayload::rejected`] and the rest still render; the
//! authoring check treats any rejected item as an error.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::common::PayloadError;

/// Parses a section payload. A missing or `null` payload yields the default.
pub fn parse_payload<P>(data: Option<&Value>) -> Result<P, PayloadError>
where
    P: DeserializeOwned + Default,
{
    match data {
        None | Some(Value::Null) => Ok(P::default()),
        Some(value) if value.is_object() => Ok(P::deserialize(value)?),
        Some(other) => Err(PayloadError::NotAnObject {
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A typed section payload.
pub trait SectionPayload: DeserializeOwned + Default {
    /// List items that were dropped while parsing.
    fn rejected_items(&self) -> &[RejectedItem] {
        &[]
    }
}

impl SectionPayload for Value {}

/// A list item that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedItem {
    pub index: usize,
    pub reason: String,
}

/// Payload of section types that read nothing from `data`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPayload;

impl<'de> Deserialize<'de> for NoPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NoPayload)
    }
}

impl SectionPayload for NoPayload {}

/// `{ "items": [...] }`, the shape shared by every list-driven section.
///
/// `items` must be a list, but each element is read on its own: elements
/// that fail are recorded in `rejected` with their position.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPayload<T> {
    pub items: Vec<T>,
    pub rejected: Vec<RejectedItem>,
}

impl<T> Default for ItemsPayload<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ItemsPayload<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawItems {
            #[serde(default)]
            items: Vec<Value>,
        }

        let raw = RawItems::deserialize(deserializer)?;
        let mut payload = Self::default();
        for (index, value) in raw.items.into_iter().enumerate() {
            match T::deserialize(value) {
                Ok(item) => payload.items.push(item),
                Err(e) => payload.rejected.push(RejectedItem {
                    index,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(payload)
    }
}

impl<T: DeserializeOwned> SectionPayload for ItemsPayload<T> {
    fn rejected_items(&self) -> &[RejectedItem] {
        &self.rejected
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconItem {
    #[serde(deserialize_with = "lenient_text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridCard {
    #[serde(deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatItem {
    #[serde(deserialize_with = "lenient_text")]
    pub value: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    #[serde(deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestimonialItem {
    #[serde(deserialize_with = "lenient_text")]
    pub quote: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "lenient_rating")]
    pub rating: Option<u8>,
}

pub type IconItemsPayload = ItemsPayload<IconItem>;
pub type GridCardsPayload = ItemsPayload<GridCard>;
pub type StatsPayload = ItemsPayload<StatItem>;
pub type FaqPayload = ItemsPayload<FaqItem>;
pub type TestimonialsPayload = ItemsPayload<TestimonialItem>;

/// Accepts strings, numbers and booleans as text. Empty strings, `null`
/// and nested values read as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Star ratings are clamped to 0..=5. Numeric strings are accepted.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(raw
        .filter(|r| r.is_finite())
        .map(|r| r.round().clamp(0.0, 5.0) as u8))
}
