use serde::{Deserialize, Deserializer, Serialize};

/* ---------------- explore request (`req` query parameter) ---------------- */

#[derive(Serialize)]
pub(crate) struct ExploreRequest<'a> {
    #[serde(rename = "comparisonItem")]
    pub(crate) comparison_item: Vec<ComparisonItem<'a>>,
    pub(crate) category: u32,
    pub(crate) property: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ComparisonItem<'a> {
    pub(crate) keyword: &'a str,
    pub(crate) time: &'a str,
    pub(crate) geo: &'a str,
}

/* ---------------- explore response ---------------- */

#[derive(Deserialize)]
pub(crate) struct ExploreEnvelope {
    #[serde(default)]
    pub(crate) widgets: Vec<Widget>,
}

#[derive(Deserialize)]
pub(crate) struct Widget {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) token: Option<String>,
    /// Sent back verbatim to the widget data endpoint.
    #[serde(default)]
    pub(crate) request: Option<serde_json::Value>,
}

/* ---------------- multiline response ---------------- */

#[derive(Deserialize)]
pub(crate) struct MultilineEnvelope {
    #[serde(default)]
    pub(crate) default: Option<MultilineNode>,
}

#[derive(Deserialize)]
pub(crate) struct MultilineNode {
    #[serde(default, rename = "timelineData")]
    pub(crate) timeline_data: Vec<TimelineNode>,
}

#[derive(Deserialize)]
pub(crate) struct TimelineNode {
    #[serde(deserialize_with = "de_i64_from_mixed")]
    pub(crate) time: i64,
    #[serde(default)]
    pub(crate) value: Vec<u8>,
    #[serde(default, rename = "isPartial")]
    pub(crate) is_partial: bool,
}

/// Accepts the unix time as a JSON number or as a numeric string (`"1696118400"`).
fn de_i64_from_mixed<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("non-integer timestamp {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid timestamp string '{s}'"))),
        other => Err(D::Error::custom(format!(
            "unexpected JSON type for timestamp: {other}"
        ))),
    }
}
