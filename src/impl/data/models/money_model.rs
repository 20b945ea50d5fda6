use serde::{Deserialize, Deserializer};

/// Lenient parse of a monetary amount arriving as free text: strips every
/// character that is not a digit or a dot (currency glyphs, grouping commas,
/// whitespace), then parses; anything still malformed becomes 0.
pub(crate) fn sanitize_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Backend numeric columns sometimes come back as JSON strings; accept both.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => sanitize_amount(&s),
        _ => 0.0,
    })
}
