use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A purchasable configuration of a product (size/color combination).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Variant {
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub stock: i64,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    /// Fields the backend sends that the catalog layer does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Product as served by the remote commerce backend.
///
/// The catalog layer only reads the fields it filters and sorts on. Anything
/// else (images, slugs, MRP, the `id` virtual, ...) is kept in `extra` and
/// written back unchanged, so products survive the fallback path intact.
/// Nulls, numeric strings and other loose values decode to defaults so one
/// untidy document never fails a whole catalog.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
    /// Flat price for variant-less products.
    #[serde(
        default,
        deserialize_with = "lenient_opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    /// Flat stock for variant-less products.
    #[serde(
        default,
        deserialize_with = "lenient_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub stock: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub sales_count: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating_average: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Backend identifier: `_id`, or the `id` virtual when only that is sent.
    pub fn key(&self) -> &str {
        if !self.id.is_empty() {
            return &self.id;
        }
        self.extra
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Minimum price across all variants, or the flat price when the product
    /// has no variants. Defaults to `0.0`.
    pub fn effective_price(&self) -> f64 {
        if self.variants.is_empty() {
            return self.price.unwrap_or(0.0);
        }
        self.variants
            .iter()
            .map(|variant| variant.price)
            .fold(f64::INFINITY, f64::min)
    }

    /// Units available across all variants, or the flat stock when the
    /// product has no variants.
    pub fn effective_stock(&self) -> i64 {
        if self.variants.is_empty() {
            return self.stock.unwrap_or(0);
        }
        self.variants.iter().map(|variant| variant.stock).sum()
    }

    /// Lowercased `name description category` used by the text filter.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.description,
            self.category.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

/// Accepts RFC 3339 strings and epoch milliseconds; anything else becomes
/// `None` instead of failing the whole catalog payload.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(Value::Number(millis)) => millis
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(raw) => Some(raw),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn number(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Option::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Option::deserialize(deserializer)?))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(Option::deserialize(deserializer)?).unwrap_or(0.0))
}

fn lenient_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(Option::deserialize(deserializer)?))
}

// Fractional counts are truncated.
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_count(deserializer)?.unwrap_or(0))
}

fn lenient_opt_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(Option::deserialize(deserializer)?).map(|count| count as i64))
}
