//! Decoded API results: JSON objects or XML documents

use quick_xml::events::{BytesDecl, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;
use serde_json::Value;

use crate::domain::{DomainError, DomainResult};

/// A successful (or error-body) result of an API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Xml(XmlDocument),
    /// Elements extracted from an XML document, rendered one after another.
    XmlElements(Vec<XmlDocument>),
}

impl Payload {
    /// Scalar value of a top-level field as text.
    ///
    /// For JSON this is a key of the top-level object, for XML a direct child
    /// of the root element. Nested structures are not returned.
    pub fn field(&self, name: &str) -> Option<String> {
        match self {
            Payload::Json(value) => match value.get(name)? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            },
            Payload::Xml(doc) => doc.child_text(name),
            Payload::XmlElements(_) => None,
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        match self {
            Payload::Json(value) => value.get(name).is_some(),
            _ => self.field(name).is_some(),
        }
    }

    /// Integer value of a top-level field.
    pub fn field_i64(&self, name: &str) -> DomainResult<i64> {
        let raw = self
            .field(name)
            .ok_or_else(|| DomainError::MissingField(name.to_string()))?;
        raw.trim().parse().map_err(|_| DomainError::InvalidField {
            field: name.to_string(),
            value: raw,
        })
    }

    /// Narrow an XML document to every element named `tag`.
    ///
    /// JSON payloads and element sequences are returned unchanged.
    pub fn select(self, tag: &str) -> DomainResult<Payload> {
        match self {
            Payload::Xml(doc) => Ok(Payload::XmlElements(doc.elements(tag)?)),
            other => Ok(other),
        }
    }
}

/// Raw XML text together with its declared encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    text: String,
    encoding: Option<String>,
}

fn xml_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidXml(e.to_string())
}

/// Same declaration with `encoding="UTF-8"`.
fn utf8_decl(decl: &BytesDecl) -> DomainResult<BytesDecl<'static>> {
    let version = decl.version().map_err(xml_err)?;
    let version = String::from_utf8_lossy(&version).into_owned();
    let standalone = match decl.standalone() {
        Some(value) => Some(String::from_utf8_lossy(&value.map_err(xml_err)?).into_owned()),
        None => None,
    };
    Ok(BytesDecl::new(&version, Some("UTF-8"), standalone.as_deref()))
}

impl XmlDocument {
    /// Check well-formedness and record the encoding from the XML declaration.
    pub fn parse(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        let mut reader = Reader::from_str(&text);
        let mut encoding = None;
        let mut has_root = false;
        loop {
            match reader.read_event().map_err(xml_err)? {
                Event::Decl(decl) => {
                    if let Some(Ok(enc)) = decl.encoding() {
                        encoding = Some(String::from_utf8_lossy(&enc).into_owned());
                    }
                }
                Event::Start(_) | Event::Empty(_) => has_root = true,
                Event::Eof => break,
                _ => {}
            }
        }
        if !has_root {
            return Err(DomainError::InvalidXml("no root element".into()));
        }
        Ok(Self { text, encoding })
    }

    fn fragment(text: String, encoding: Option<String>) -> Self {
        Self { text, encoding }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Declared encoding, UTF-8 when the document has no declaration.
    pub fn encoding(&self) -> &str {
        self.encoding.as_deref().unwrap_or("UTF-8")
    }

    /// Re-indent with two spaces.
    ///
    /// Whitespace-only text between elements is dropped, any other text is
    /// kept verbatim. The output is UTF-8, so an XML declaration naming
    /// another encoding is rewritten to say so.
    pub fn pretty(&self) -> DomainResult<String> {
        let mut reader = Reader::from_str(&self.text);
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        loop {
            match reader.read_event().map_err(xml_err)? {
                Event::Eof => break,
                Event::Text(t) if t.iter().all(u8::is_ascii_whitespace) => {}
                Event::Decl(decl) if decl.encoding().is_some() => {
                    writer
                        .write_event(Event::Decl(utf8_decl(&decl)?))
                        .map_err(xml_err)?;
                }
                event => writer.write_event(event).map_err(xml_err)?,
            }
        }
        let mut out = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
        out.push('\n');
        Ok(out)
    }

    /// Text of the first direct child of the root element named `name`.
    fn child_text(&self, name: &str) -> Option<String> {
        let mut reader = Reader::from_str(&self.text);
        reader.config_mut().trim_text(true);
        let mut depth = 0usize;
        let mut inside = false;
        loop {
            match reader.read_event().ok()? {
                Event::Start(e) => {
                    depth += 1;
                    if depth == 2 && e.name().as_ref() == name.as_bytes() {
                        inside = true;
                    }
                }
                Event::Empty(e) if depth == 1 && e.name().as_ref() == name.as_bytes() => {
                    return Some(String::new());
                }
                Event::Text(t) if inside && depth == 2 => {
                    return t.unescape().ok().map(|s| s.into_owned());
                }
                Event::End(_) => {
                    if inside && depth == 2 {
                        return Some(String::new());
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => return None,
                _ => {}
            }
        }
    }

    /// Every element named `tag`, at any depth, serialized on its own.
    ///
    /// Elements nested inside a match are part of that match, not separate results.
    fn elements(&self, tag: &str) -> DomainResult<Vec<XmlDocument>> {
        let mut reader = Reader::from_str(&self.text);
        let mut found = Vec::new();
        let mut current: Option<(Writer<Vec<u8>>, usize)> = None;
        loop {
            let event = reader.read_event().map_err(xml_err)?;
            if let Event::Eof = event {
                break;
            }
            if let Some((writer, depth)) = current.as_mut() {
                match &event {
                    Event::Start(_) => *depth += 1,
                    Event::End(_) => *depth -= 1,
                    _ => {}
                }
                writer.write_event(event).map_err(xml_err)?;
                if *depth == 0 {
                    if let Some((writer, _)) = current.take() {
                        let text = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
                        found.push(Self::fragment(text, self.encoding.clone()));
                    }
                }
                continue;
            }
            match &event {
                Event::Start(e) if e.name().as_ref() == tag.as_bytes() => {
                    let mut writer = Writer::new(Vec::new());
                    writer.write_event(event.clone()).map_err(xml_err)?;
                    current = Some((writer, 1));
                }
                Event::Empty(e) if e.name().as_ref() == tag.as_bytes() => {
                    let mut writer = Writer::new(Vec::new());
                    writer.write_event(event.clone()).map_err(xml_err)?;
                    let text = String::from_utf8(writer.into_inner()).map_err(xml_err)?;
                    found.push(Self::fragment(text, self.encoding.clone()));
                }
                _ => {}
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ZONES: &str = r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<listzonesresponse cloud-stack-version="4.18"><count>2</count><zone><id>z1</id><name>ch-gva-2</name></zone><zone><id>z2</id><name>de-fra-1</name></zone></listzonesresponse>"#;

    #[test]
    fn test_json_field_access() {
        let payload = Payload::Json(json!({"jobid": "abc", "jobstatus": 0, "nested": {"a": 1}}));

        assert_eq!(payload.field("jobid").as_deref(), Some("abc"));
        assert_eq!(payload.field_i64("jobstatus"), Ok(0));
        assert_eq!(payload.field("nested"), None);
        assert!(payload.has_field("nested"));
        assert_eq!(
            payload.field_i64("jobresultcode"),
            Err(DomainError::MissingField("jobresultcode".into()))
        );
    }

    #[test]
    fn test_xml_parse_records_encoding() {
        let doc = XmlDocument::parse(ZONES).unwrap();

        assert_eq!(doc.encoding(), "ISO-8859-1");
        assert_eq!(XmlDocument::parse("<a/>").unwrap().encoding(), "UTF-8");
        assert!(XmlDocument::parse("not xml at all").is_err());
    }

    #[test]
    fn test_xml_field_reads_direct_children_only() {
        let doc = XmlDocument::parse(
            "<deployvirtualmachineresponse><jobid>j-1</jobid><vm><id>x</id></vm></deployvirtualmachineresponse>",
        )
        .unwrap();
        let payload = Payload::Xml(doc);

        assert_eq!(payload.field("jobid").as_deref(), Some("j-1"));
        assert_eq!(payload.field("id"), None);
    }

    #[test]
    fn test_select_extracts_each_matching_element() {
        let payload = Payload::Xml(XmlDocument::parse(ZONES).unwrap());

        let Payload::XmlElements(zones) = payload.select("zone").unwrap() else {
            panic!("expected element sequence");
        };

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].text(), "<zone><id>z1</id><name>ch-gva-2</name></zone>");
        assert_eq!(zones[1].encoding(), "ISO-8859-1");
    }

    #[test]
    fn test_pretty_indents_two_spaces() {
        let doc = XmlDocument::parse("<a><b>1</b></a>").unwrap();

        assert_eq!(doc.pretty().unwrap(), "<a>\n  <b>1</b>\n</a>\n");
    }

    #[test]
    fn test_pretty_keeps_text_content_verbatim() {
        let doc = XmlDocument::parse(
            "<r>\n  <displaytext>  padded name  </displaytext>\n  <id>1</id>\n</r>",
        )
        .unwrap();

        assert_eq!(
            doc.pretty().unwrap(),
            "<r>\n  <displaytext>  padded name  </displaytext>\n  <id>1</id>\n</r>\n"
        );
    }

    #[test]
    fn test_pretty_declares_the_utf8_it_writes() {
        let doc = XmlDocument::parse(
            "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r><n>Zürich</n></r>",
        )
        .unwrap();

        let out = doc.pretty().unwrap();

        assert_eq!(doc.encoding(), "ISO-8859-1");
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<r>\n  <n>Zürich</n>\n</r>\n"
        );
    }
}
