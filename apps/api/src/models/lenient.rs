//! Tolerant field decoders for provider output. Extracted values are typed by
//! a crawler, so a number may arrive as `"$85,000"` and a label as `5`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, number, or bool. Blank strings become `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts a number or a numeric string with a dollar sign, thousands
/// separators, or a trailing percent sign. Anything else becomes `None`.
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(&s),
        _ => None,
    })
}

/// Accepts a list of strings or a single comma-separated string.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let items: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Strips one leading `$`, one trailing `%`, and thousands separators. A unit
/// suffix (`120k`) or a comma that is not a thousands separator (`1,5`) makes
/// the value unreadable.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let (sign, unsigned) = match unsigned.strip_prefix('-') {
        Some(rest) => ("-", rest.trim_start()),
        None => ("", unsigned),
    };
    let body = unsigned.strip_prefix('$').unwrap_or(unsigned).trim();
    if body.is_empty() {
        return None;
    }

    let mut groups = body.split(',');
    let mut cleaned = format!("{sign}{}", groups.next()?);
    for group in groups {
        let whole = group.split('.').next()?;
        if cleaned.contains('.') || whole.len() != 3 || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        cleaned.push_str(group);
    }

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "text_list")]
        list: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_opt_text_coerces_scalars() {
        assert_eq!(probe(r#"{"text": 5}"#).text.as_deref(), Some("5"));
        assert_eq!(probe(r#"{"text": "  Senior "}"#).text.as_deref(), Some("Senior"));
        assert_eq!(probe(r#"{"text": "   "}"#).text, None);
        assert_eq!(probe(r#"{"text": null}"#).text, None);
        assert_eq!(probe(r#"{}"#).text, None);
    }

    #[test]
    fn test_opt_number_parses_formatted_strings() {
        assert_eq!(probe(r#"{"number": 85000}"#).number, Some(85000.0));
        assert_eq!(probe(r#"{"number": "$85,000"}"#).number, Some(85000.0));
        assert_eq!(probe(r#"{"number": "12.5%"}"#).number, Some(12.5));
        assert_eq!(probe(r#"{"number": "n/a"}"#).number, None);
        assert_eq!(probe(r#"{"number": [1]}"#).number, None);
        assert_eq!(probe(r#"{"number": "1,250,000.50"}"#).number, Some(1_250_000.5));
        assert_eq!(probe(r#"{"number": "-3.5%"}"#).number, Some(-3.5));
    }

    #[test]
    fn test_opt_number_rejects_units_and_odd_separators() {
        assert_eq!(probe(r#"{"number": "$120k"}"#).number, None);
        assert_eq!(probe(r#"{"number": "1,5"}"#).number, None);
        assert_eq!(probe(r#"{"number": "85000 USD"}"#).number, None);
        assert_eq!(probe(r#"{"number": "1.5,000"}"#).number, None);
        assert_eq!(probe(r#"{"number": "inf"}"#).number, None);
    }

    #[test]
    fn test_text_list_accepts_array_or_csv() {
        assert_eq!(probe(r#"{"list": ["Rust", " ", "SQL"]}"#).list, vec!["Rust", "SQL"]);
        assert_eq!(probe(r#"{"list": "Rust, SQL"}"#).list, vec!["Rust", "SQL"]);
        assert!(probe(r#"{"list": null}"#).list.is_empty());
    }
}
