use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Only text values. `true`/`false`, lists and objects have no text form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

pub type FrontMatter = BTreeMap<String, FieldValue>;

/// Example of a header block
/// ---
/// title: "Mi primer post"
/// pubDate: 2024-03-01
/// relatedSlug: my-first-post
/// tags: [rust, blog]
/// image:
///   url: "cdn-id/cover"
///   alt: "Cover"
/// ---
pub fn parse_front_matter(content: &str) -> FrontMatter {
    let mut fields = FrontMatter::new();

    let Some(block) = header_block(content) else {
        return fields;
    };

    let mut current_key: Option<String> = None;

    for line in block {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // List item, owned by the last top-level key
        if let Some(item) = trimmed.strip_prefix("- ") {
            if let Some(ref key) = current_key {
                push_list_item(&mut fields, key, item);
            }
            continue;
        }

        if let Some((key, val)) = extract_nested_key_val(line) {
            if let Some(ref parent) = current_key {
                if let Some(FieldValue::Object(obj)) = fields.get_mut(parent) {
                    obj.insert(key.to_string(), parse_scalar(val));
                }
            }
            continue;
        }

        let (key, val) = match extract_key_val(line) {
            None => continue,
            Some((k, v)) => (k, v),
        };

        let value = if val.is_empty() {
            FieldValue::Object(BTreeMap::new())
        } else {
            parse_value(val)
        };
        fields.insert(key.to_string(), value);
        current_key = Some(key.to_string());
    }

    fields
}

/// Lines between the opening delimiter (first line) and the first closing one.
fn header_block(content: &str) -> Option<Vec<&str>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines();

    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => return None,
    }

    let mut block = vec![];
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some(block);
        }
        block.push(line);
    }

    // Never closed
    None
}

fn push_list_item(fields: &mut FrontMatter, key: &str, item: &str) {
    let Some(value) = fields.get_mut(key) else {
        return;
    };

    match value {
        FieldValue::List(items) => items.push(strip_quotes(item.trim()).to_string()),
        FieldValue::Object(obj) if obj.is_empty() => {
            *value = FieldValue::List(vec![strip_quotes(item.trim()).to_string()]);
        }
        _ => {}
    }
}

fn parse_value(val: &str) -> FieldValue {
    if val.starts_with('[') && val.ends_with(']') {
        let inner = &val[1..val.len() - 1];
        let items = inner.split(',')
            .map(|s| strip_quotes(s.trim()).trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        return FieldValue::List(items);
    }

    parse_scalar(val)
}

fn parse_scalar(val: &str) -> FieldValue {
    match val {
        "true" => FieldValue::Bool(true),
        "false" => FieldValue::Bool(false),
        _ => FieldValue::Text(strip_quotes(val).to_string()),
    }
}

fn strip_quotes(val: &str) -> &str {
    let val = val.strip_prefix(['"', '\'']).unwrap_or(val);
    val.strip_suffix(['"', '\'']).unwrap_or(val)
}

fn extract_key_val(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref KEY_REGEX: Regex = Regex::new(r"^(?P<key>[A-Za-z_][\w-]*):\s*(?P<value>.*)$").unwrap();
    }
    extract_header_key_val(line, &KEY_REGEX)
}

fn extract_nested_key_val(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref NESTED_REGEX: Regex = Regex::new(r"^ {2,}(?P<key>[A-Za-z_][\w-]*):\s*(?P<value>.*)$").unwrap();
    }
    extract_header_key_val(line, &NESTED_REGEX)
}

fn extract_header_key_val<'a>(line: &'a str, header_regex: &Regex) -> Option<(&'a str, &'a str)> {
    header_regex.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str().trim()).unwrap_or("");
        key.map(|key| (key, val))
    })
}
