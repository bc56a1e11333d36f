//! Result rendering: indented JSON with sorted keys, pretty-printed XML

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::ApplicationResult;
use crate::domain::Payload;
use crate::infrastructure::traits::{Highlighter, Syntax};

/// Renders payloads as text, highlighting when a highlighter is provided.
///
/// Rendering never modifies the payload.
#[derive(Clone, Default)]
pub struct Formatter {
    highlighter: Option<Arc<dyn Highlighter>>,
}

impl Formatter {
    /// Plain-text formatter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlighter(highlighter: Option<Arc<dyn Highlighter>>) -> Self {
        Self { highlighter }
    }

    /// Render without a trailing newline.
    pub fn render(&self, payload: &Payload) -> ApplicationResult<String> {
        let (text, syntax) = match payload {
            Payload::Json(value) => (render_json(value), Syntax::Json),
            Payload::Xml(doc) => (doc.pretty()?, Syntax::Xml),
            Payload::XmlElements(elements) => {
                let mut out = String::new();
                for element in elements {
                    out.push_str(&element.pretty()?);
                }
                (out, Syntax::Xml)
            }
        };
        let text = text.trim_end().to_string();

        Ok(match &self.highlighter {
            Some(h) => h.highlight(&text, syntax),
            None => text,
        })
    }
}

/// Two-space indented JSON, object keys in lexicographic order.
pub fn render_json(value: &Value) -> String {
    let sorted = sort_keys(value);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| sorted.to_string())
}

// serde_json keeps insertion order once any crate enables `preserve_order`.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key.clone(), sort_keys(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::XmlDocument;
    use serde_json::json;

    struct Brackets;

    impl Highlighter for Brackets {
        fn highlight(&self, text: &str, syntax: Syntax) -> String {
            format!("[{:?}]{}", syntax, text)
        }
    }

    #[test]
    fn test_json_keys_sorted_with_two_space_indent() {
        let payload = Payload::Json(json!({"b": 1, "a": 2}));

        let out = Formatter::new().render(&payload).unwrap();

        assert_eq!(out, "{\n  \"a\": 2,\n  \"b\": 1\n}");
    }

    #[test]
    fn test_nested_objects_are_sorted() {
        let payload = Payload::Json(json!({"z": [{"y": 1, "x": 2}], "m": {"d": 0, "c": 0}}));

        let out = Formatter::new().render(&payload).unwrap();

        assert_eq!(
            out,
            "{\n  \"m\": {\n    \"c\": 0,\n    \"d\": 0\n  },\n  \"z\": [\n    {\n      \"x\": 2,\n      \"y\": 1\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_render_does_not_modify_payload() {
        let payload = Payload::Json(json!({"b": {"d": 1, "c": 2}, "a": 2}));
        let before = payload.clone();

        Formatter::new().render(&payload).unwrap();

        assert_eq!(payload, before);
    }

    #[test]
    fn test_highlighter_is_applied_when_present() {
        let formatter = Formatter::with_highlighter(Some(Arc::new(Brackets)));

        let out = formatter.render(&Payload::Json(json!({"a": 1}))).unwrap();

        assert!(out.starts_with("[Json]{"));
    }

    #[test]
    fn test_xml_elements_are_concatenated() {
        let doc = XmlDocument::parse(
            "<listzonesresponse><zone><id>1</id></zone><zone><id>2</id></zone></listzonesresponse>",
        )
        .unwrap();
        let payload = Payload::Xml(doc).select("zone").unwrap();

        let out = Formatter::new().render(&payload).unwrap();

        assert_eq!(
            out,
            "<zone>\n  <id>1</id>\n</zone>\n<zone>\n  <id>2</id>\n</zone>"
        );
    }

    #[test]
    fn test_xml_fragments_are_utf8_without_declaration() {
        let doc = XmlDocument::parse(
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r><zone>Zürich</zone></r>",
        )
        .unwrap();
        let payload = Payload::Xml(doc).select("zone").unwrap();

        let out = Formatter::new().render(&payload).unwrap();

        assert_eq!(out, "<zone>Zürich</zone>");
    }
}
