// file: src/mapper/fields.rs
// description: declarative field paths for meta and result documents
// reference: fixed-path extraction from Google Custom Search responses

use crate::error::{MapperError, Result};
use crate::models::{AccountInfo, SearchResponse};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Key(&'static str),
    Index(usize),
    /// The result item currently being mapped.
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text stored verbatim; see `RawText`.
    Raw,
    Integer,
    Float,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub target: &'static str,
    pub path: &'static [Segment],
    pub kind: FieldKind,
}

impl FieldMapping {
    const fn new(target: &'static str, path: &'static [Segment], kind: FieldKind) -> Self {
        Self { target, path, kind }
    }
}

use FieldKind::{Float, Integer, Raw, Text};
use Segment::{Index, Item, Key};

/// Later entries overwrite earlier ones with the same target, so the
/// `searchInformation` total replaces the one echoed in the request.
pub const META_FIELDS: &[FieldMapping] = &[
    FieldMapping::new("kind", &[Key("kind")], Text),
    FieldMapping::new("template", &[Key("url"), Key("template")], Raw),
    FieldMapping::new("title", &[Key("queries"), Key("request"), Index(0), Key("title")], Text),
    FieldMapping::new(
        "totalResults",
        &[Key("queries"), Key("request"), Index(0), Key("totalResults")],
        Text,
    ),
    FieldMapping::new(
        "searchTerms",
        &[Key("queries"), Key("request"), Index(0), Key("searchTerms")],
        Text,
    ),
    FieldMapping::new("count", &[Key("queries"), Key("request"), Index(0), Key("count")], Integer),
    FieldMapping::new(
        "language",
        &[Key("queries"), Key("request"), Index(0), Key("language")],
        Text,
    ),
    FieldMapping::new(
        "inputEncoding",
        &[Key("queries"), Key("request"), Index(0), Key("inputEncoding")],
        Text,
    ),
    FieldMapping::new(
        "outputEncoding",
        &[Key("queries"), Key("request"), Index(0), Key("outputEncoding")],
        Text,
    ),
    FieldMapping::new("safe", &[Key("queries"), Key("request"), Index(0), Key("safe")], Text),
    FieldMapping::new("cx", &[Key("queries"), Key("request"), Index(0), Key("cx")], Text),
    FieldMapping::new("filter", &[Key("queries"), Key("request"), Index(0), Key("filter")], Text),
    FieldMapping::new(
        "exactTerms",
        &[Key("queries"), Key("request"), Index(0), Key("exactTerms")],
        Text,
    ),
    FieldMapping::new(
        "dateRestrict",
        &[Key("queries"), Key("request"), Index(0), Key("dateRestrict")],
        Text,
    ),
    FieldMapping::new("searchTime", &[Key("searchInformation"), Key("searchTime")], Float),
    FieldMapping::new(
        "formattedSearchTime",
        &[Key("searchInformation"), Key("formattedSearchTime")],
        Text,
    ),
    FieldMapping::new("totalResults", &[Key("searchInformation"), Key("totalResults")], Text),
];

pub const RESULT_FIELDS: &[FieldMapping] = &[
    FieldMapping::new("kind", &[Key("kind")], Text),
    FieldMapping::new("cx", &[Key("queries"), Key("request"), Index(0), Key("cx")], Text),
    FieldMapping::new("title", &[Key("items"), Item, Key("title")], Text),
    FieldMapping::new("link", &[Key("items"), Item, Key("link")], Text),
    FieldMapping::new("snippet", &[Key("items"), Item, Key("snippet")], Text),
];

/// Renders a path the way it reads in the API docs, e.g. `queries.request[0].cx`.
pub fn render_path(path: &[Segment], item: Option<usize>) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }

    let mut rendered = String::new();
    for segment in path {
        match segment {
            Key(key) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            Index(index) => rendered.push_str(&format!("[{}]", index)),
            Item => match item {
                Some(index) => rendered.push_str(&format!("[{}]", index)),
                None => rendered.push_str("[?]"),
            },
        }
    }
    rendered
}

pub fn resolve<'a>(root: &'a Value, path: &[Segment], item: Option<usize>) -> Result<&'a Value> {
    let mut current = root;

    for (depth, segment) in path.iter().enumerate() {
        current = match *segment {
            Key(key) => {
                let object = current.as_object().ok_or_else(|| MapperError::UnexpectedShape {
                    path: render_path(&path[..depth], item),
                    expected: "object",
                })?;
                object.get(key).ok_or_else(|| MapperError::MissingField {
                    path: render_path(&path[..=depth], item),
                })?
            }
            Index(_) | Item => {
                let index = match *segment {
                    Index(index) => index,
                    _ => item.ok_or_else(|| {
                        MapperError::Validation(format!(
                            "Path {} needs an item index",
                            render_path(path, None)
                        ))
                    })?,
                };
                let array = current.as_array().ok_or_else(|| MapperError::UnexpectedShape {
                    path: render_path(&path[..depth], item),
                    expected: "array",
                })?;
                array.get(index).ok_or_else(|| MapperError::IndexOutOfRange {
                    path: render_path(&path[..=depth], item),
                    index,
                    len: array.len(),
                })?
            }
        };
    }

    Ok(current)
}

fn coerce(value: &Value, kind: FieldKind, path: &[Segment], item: Option<usize>) -> Result<Value> {
    let coerced = match kind {
        Text | Raw => value.as_str().map(Value::from),
        Integer => value.as_i64().map(Value::from),
        Float => value.as_f64().map(Value::from),
    };

    coerced.ok_or_else(|| MapperError::UnexpectedShape {
        path: render_path(path, item),
        expected: match kind {
            Text | Raw => "string",
            Integer => "integer",
            Float => "number",
        },
    })
}

/// Flat record of the account identity plus every mapped field, in mapping order.
pub fn collect_fields(
    response: &SearchResponse,
    account: &AccountInfo,
    fields: &[FieldMapping],
    item: Option<usize>,
) -> Result<Map<String, Value>> {
    let mut record = Map::new();
    record.insert(
        "account_holder".to_string(),
        Value::from(account.account_holder.as_str()),
    );
    record.insert(
        "account_number".to_string(),
        Value::from(account.account_number.as_str()),
    );

    for field in fields {
        let value = resolve(response.as_value(), field.path, item)?;
        record.insert(
            field.target.to_string(),
            coerce(value, field.kind, field.path, item)?,
        );
    }

    Ok(record)
}
