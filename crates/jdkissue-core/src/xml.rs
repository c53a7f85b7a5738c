// Rust guideline compliant 2026-02-07

//! Tracker XML payloads.
//!
//! The tracker exports one issue per RSS document:
//! `rss/channel/item` with `title`, `priority`, `type`, repeated
//! `component`, an HTML-escaped `description` and a list of
//! `customfields/customfield` entries.

use crate::models::IssueRecord;
use crate::{Error, Result};
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::path::Path;

/// Longest HTML5 entity name plus its `;`.
const MAX_REFERENCE_LEN: usize = 33;

/// Minimal element tree built from a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Local element name.
    pub name: String,
    /// Concatenated, unescaped text content directly under this element.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Returns the first child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Iterates over children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Returns the trimmed text of the first child with the given name,
    /// or `None` if the child is missing or blank.
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).and_then(|child| normalize_text(&child.text))
    }
}

/// Parses a payload into an element tree.
///
/// # Errors
///
/// Returns `MalformedXml` if the payload is not well-formed.
pub fn parse_document(text: &str, source_name: &str) -> Result<XmlElement> {
    let malformed = |message: String| Error::MalformedXml {
        source_name: source_name.to_string(),
        message,
    };

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(XmlElement::named(name));
            }
            Ok(Event::Empty(empty)) => {
                let name = String::from_utf8_lossy(empty.local_name().as_ref()).into_owned();
                attach(&mut stack, &mut root, XmlElement::named(name));
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(content)) => {
                let value = content
                    .unescape()
                    .map_err(|err| malformed(err.to_string()))?;
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&value);
                }
            }
            Ok(Event::CData(content)) => {
                if let Some(open) = stack.last_mut() {
                    open.text
                        .push_str(&String::from_utf8_lossy(&content.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(malformed(err.to_string())),
            Ok(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(malformed("unexpected end of document".to_string()));
    }
    root.ok_or_else(|| malformed("document has no root element".to_string()))
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

/// Checks that a payload is a tracker issue document and returns its item.
///
/// # Errors
///
/// Returns an error if the payload is malformed, the root element is not
/// `rss`, or the `channel` or `item` element is missing.
pub fn validate_issue_payload(text: &str, source_name: &str) -> Result<XmlElement> {
    let root = parse_document(text, source_name)?;
    if !root.name.eq_ignore_ascii_case("rss") {
        return Err(Error::InvalidPayload(format!(
            "unexpected root element: {}",
            root.name
        )));
    }
    let channel = root
        .child("channel")
        .ok_or_else(|| Error::InvalidPayload("channel element not found".to_string()))?;
    let item = channel.child("item").ok_or_else(|| {
        Error::InvalidPayload("item element not found; the issue does not exist".to_string())
    })?;
    Ok(item.clone())
}

/// Extracts the issue record from a payload.
///
/// # Errors
///
/// Returns an error if the payload is invalid or any of Title, Priority,
/// Type or Component is missing.
pub fn extract_issue_record(text: &str, source_name: &str) -> Result<IssueRecord> {
    let item = validate_issue_payload(text, source_name)?;
    let br = Regex::new(r"(?i)<br\s*/?>")?;

    let components: Vec<String> = item
        .children_named("component")
        .filter_map(|element| normalize_text(&element.text))
        .collect();

    let record = IssueRecord {
        title: item.child_text("title"),
        priority: item.child_text("priority"),
        issue_type: item.child_text("type"),
        component: (!components.is_empty()).then(|| components.join(", ")),
        description: item
            .child("description")
            .and_then(|element| normalize_description(&element.text, &br)),
        os: extract_os(&item),
    };

    let missing: Vec<&'static str> = [
        ("Title", record.title.is_none()),
        ("Priority", record.priority.is_none()),
        ("Type", record.issue_type.is_none()),
        ("Component", record.component.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();

    if !missing.is_empty() {
        return Err(Error::MissingFields {
            source_name: source_name.to_string(),
            fields: missing,
        });
    }

    Ok(record)
}

/// Reads and extracts an issue record from a payload file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or invalid.
pub fn load_issue_record(path: &Path) -> Result<IssueRecord> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            kind: "Issue XML",
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    extract_issue_record(&text, &path.display().to_string())
}

fn extract_os(item: &XmlElement) -> Option<String> {
    let field = item
        .child("customfields")?
        .children_named("customfield")
        .find(|field| field.child_text("customfieldname").as_deref() == Some("OS"))?;

    let values: Vec<String> = field
        .child("customfieldvalues")?
        .children_named("customfieldvalue")
        .filter_map(|value| normalize_text(&value.text))
        .collect();

    (!values.is_empty()).then(|| values.join(", "))
}

fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Converts an HTML description into plain text lines.
///
/// Entities are decoded, `<br>` becomes a newline, other tags are dropped,
/// lines are trimmed and blank lines removed. Returns `None` when nothing
/// is left.
pub fn normalize_description(raw: &str, br: &Regex) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    let decoded = decode_html_entities(raw).replace('\r', "");
    let decoded = br.replace_all(&decoded, "\n");

    let mut stripped = String::with_capacity(decoded.len());
    let mut in_tag = false;
    for ch in decoded.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    let lines: Vec<&str> = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Decodes named (HTML5) and numeric character references.
///
/// Unknown or unterminated references are kept verbatim.
pub fn decode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let reference = candidate
            .char_indices()
            .skip(1)
            .take(MAX_REFERENCE_LEN)
            .take_while(|(_, ch)| !ch.is_whitespace() && *ch != '&')
            .find(|(_, ch)| *ch == ';')
            .map(|(end, _)| &candidate[..=end]);

        match reference.map(|r| (r, unescape_with(r, resolve_html5_entity))) {
            Some((reference, Ok(decoded))) => {
                out.push_str(&decoded);
                rest = &candidate[reference.len()..];
            }
            _ => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
