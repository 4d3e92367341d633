//! Styled-string runs.
//!
//! Every text property of a block is a list of runs, each encoded as a JSON
//! array `[text]` or `[text, [[code], [code, payload], ...]]`:
//!
//! ```json
//! [["Hello "], ["world", [["b"], ["a", "https://example.com"]]]]
//! ```

use std::fmt;

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One run of text and the style markers applied to it, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRun {
    /// Plain text of the run.
    pub text: String,
    /// Style markers. The first marker ends up as the outermost wrapper.
    pub styles: Vec<Style>,
}

impl TextRun {
    /// Create an unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Create a run with style markers.
    #[must_use]
    pub fn styled(text: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }
}

/// Concatenate the plain text of a list of runs.
#[must_use]
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// Inline style marker attached to a [`TextRun`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Style {
    /// `b`
    Bold,
    /// `i`
    Italic,
    /// `s`
    Strike,
    /// `_`
    Underline,
    /// `c`
    Code,
    /// `a` with the link target.
    Link(String),
    /// `h` with a color or background token.
    Color(String),
    /// `u` with the mentioned user id.
    UserMention(String),
    /// `p` with the mentioned page id.
    PageMention(String),
    /// `d` with the mentioned date.
    Date(DateMention),
    /// `m` with the discussion id.
    Comment(String),
    /// Any code this crate does not know about.
    Unknown(String),
}

impl Style {
    /// Short code of the marker as it appears in the record.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Strike => "s",
            Self::Underline => "_",
            Self::Code => "c",
            Self::Link(_) => "a",
            Self::Color(_) => "h",
            Self::UserMention(_) => "u",
            Self::PageMention(_) => "p",
            Self::Date(_) => "d",
            Self::Comment(_) => "m",
            Self::Unknown(code) => code,
        }
    }

    fn payload(&self) -> Option<Value> {
        match self {
            Self::Link(s)
            | Self::Color(s)
            | Self::UserMention(s)
            | Self::PageMention(s)
            | Self::Comment(s) => Some(Value::String(s.clone())),
            Self::Date(date) => serde_json::to_value(date).ok(),
            _ => None,
        }
    }
}

impl From<Vec<Value>> for Style {
    fn from(parts: Vec<Value>) -> Self {
        let code = match parts.first() {
            Some(Value::String(code)) => code.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let payload = parts.get(1);
        let payload_str = || {
            payload
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };

        match code.as_str() {
            "b" => Self::Bold,
            "i" => Self::Italic,
            "s" => Self::Strike,
            "_" => Self::Underline,
            "c" => Self::Code,
            "a" => Self::Link(payload_str()),
            "h" => Self::Color(payload_str()),
            "u" => Self::UserMention(payload_str()),
            "p" => Self::PageMention(payload_str()),
            "m" => Self::Comment(payload_str()),
            "d" => Self::Date(
                payload
                    .and_then(|v| DateMention::deserialize(v).ok())
                    .unwrap_or_default(),
            ),
            _ => Self::Unknown(code),
        }
    }
}

impl From<Value> for Style {
    /// Markers that are not arrays become [`Style::Unknown`] so that
    /// rendering reports them instead of dropping the run.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(parts) => Self::from(parts),
            Value::String(code) => Self::Unknown(code),
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// Styles of a run. A style list that is not an array leaves the run unstyled.
fn styles_from_value(value: Value) -> Vec<Style> {
    match value {
        Value::Array(markers) => markers.into_iter().map(Style::from).collect(),
        _ => Vec::new(),
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = self.payload();
        let mut seq = serializer.serialize_seq(Some(1 + usize::from(payload.is_some())))?;
        seq.serialize_element(self.code())?;
        if let Some(payload) = payload {
            seq.serialize_element(&payload)?;
        }
        seq.end()
    }
}

/// Payload of a `d` (date mention) marker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DateMention {
    /// `date`, `daterange`, `datetime` or `datetimerange`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub date_type: Option<String>,
    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl<'de> Deserialize<'de> for TextRun {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RunVisitor;

        impl<'de> Visitor<'de> for RunVisitor {
            type Value = TextRun;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a styled-string run [text, styles?]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TextRun, A::Error> {
                let text = match seq.next_element::<Value>()? {
                    Some(Value::String(text)) => text,
                    _ => String::new(),
                };
                let styles = seq
                    .next_element::<Value>()?
                    .map(styles_from_value)
                    .unwrap_or_default();
                // Trailing elements carry nothing we render
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(TextRun { text, styles })
            }
        }

        deserializer.deserialize_seq(RunVisitor)
    }
}

impl Serialize for TextRun {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.styles.is_empty() { 1 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.text)?;
        if !self.styles.is_empty() {
            seq.serialize_element(&self.styles)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn runs(value: Value) -> Vec<TextRun> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_plain_run() {
        assert_eq!(runs(json!([["Hello"]])), vec![TextRun::plain("Hello")]);
    }

    #[test]
    fn test_styled_run() {
        let parsed = runs(json!([["x", [["b"], ["a", "https://example.com"], ["h", "red"]]]]));
        assert_eq!(
            parsed,
            vec![TextRun::styled(
                "x",
                vec![
                    Style::Bold,
                    Style::Link("https://example.com".to_owned()),
                    Style::Color("red".to_owned()),
                ]
            )]
        );
    }

    #[test]
    fn test_mentions() {
        let parsed = runs(json!([
            ["‣", [["u", "user-1"]]],
            ["‣", [["p", "page-1"]]],
            ["‣", [["d", {"type": "date", "start_date": "2019-06-18"}]]]
        ]));
        assert_eq!(parsed[0].styles, vec![Style::UserMention("user-1".to_owned())]);
        assert_eq!(parsed[1].styles, vec![Style::PageMention("page-1".to_owned())]);
        assert_eq!(
            parsed[2].styles,
            vec![Style::Date(DateMention {
                date_type: Some("date".to_owned()),
                start_date: "2019-06-18".to_owned(),
                ..Default::default()
            })]
        );
    }

    #[test]
    fn test_unknown_marker_retained() {
        let parsed = runs(json!([["x", [["z", 1]]]]));
        assert_eq!(parsed[0].styles, vec![Style::Unknown("z".to_owned())]);
        assert_eq!(parsed[0].styles[0].code(), "z");
    }

    #[test]
    fn test_malformed_marker_keeps_text() {
        let parsed = runs(json!([["Hello ", [["b"], "x"]], ["world"]]));
        assert_eq!(
            parsed,
            vec![
                TextRun::styled("Hello ", vec![Style::Bold, Style::Unknown("x".to_owned())]),
                TextRun::plain("world"),
            ]
        );
    }

    #[test]
    fn test_non_array_styles_leave_run_unstyled() {
        let parsed = runs(json!([["x", "b"], [42, [["i"]]]]));
        assert_eq!(
            parsed,
            vec![TextRun::plain("x"), TextRun::styled("", vec![Style::Italic])]
        );
    }

    #[test]
    fn test_link_without_target() {
        let parsed = runs(json!([["x", [["a"]]]]));
        assert_eq!(parsed[0].styles, vec![Style::Link(String::new())]);
    }

    #[test]
    fn test_malformed_date_payload_defaults() {
        let parsed = runs(json!([["‣", [["d", "not-an-object"]]]]));
        assert_eq!(parsed[0].styles, vec![Style::Date(DateMention::default())]);
    }

    #[test]
    fn test_extra_elements_ignored() {
        let parsed = runs(json!([["x", [["i"]], "extra"]]));
        assert_eq!(parsed, vec![TextRun::styled("x", vec![Style::Italic])]);
    }

    #[test]
    fn test_empty_run() {
        assert_eq!(runs(json!([[]])), vec![TextRun::default()]);
    }

    #[test]
    fn test_serialize_matches_record_shape() {
        let value = serde_json::to_value(vec![
            TextRun::plain("a"),
            TextRun::styled("b", vec![Style::Bold, Style::Link("#x".to_owned())]),
        ])
        .unwrap();
        assert_eq!(value, json!([["a"], ["b", [["b"], ["a", "#x"]]]]));
    }

    #[test]
    fn test_plain_text() {
        let parsed = runs(json!([["Hello "], ["world", [["b"]]]]));
        assert_eq!(plain_text(&parsed), "Hello world");
    }
}
