//! Layout document loading
//!
//! Splits the YAML document into its sections:
//! - `BASE` (required): base specification
//! - `MODIFIERS` (required): modifier declarations
//! - `ROWS`: physical key rows for row shorthand
//! - `GROUPS`: group name → latch shortcut
//! - `LITERALS`: label → verbatim XKB text for the prologue
//! - anything else: override sections, in document order

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

use crate::domain::entities::{scalar_text, yaml_type_name, RowLayout, SpecNode};
use crate::domain::services::ModifierSpec;
use crate::error::{XkbgenError, XkbgenResult};

pub const BASE_SECTION: &str = "BASE";
pub const MODIFIERS_SECTION: &str = "MODIFIERS";
pub const ROWS_SECTION: &str = "ROWS";
pub const GROUPS_SECTION: &str = "GROUPS";
pub const LITERALS_SECTION: &str = "LITERALS";

/// One ROWS entry: a list of key codes, or one whitespace-separated line.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RowSpec {
    Keys(Vec<String>),
    Line(String),
}

impl RowSpec {
    fn into_keys(self) -> Vec<String> {
        match self {
            RowSpec::Keys(keys) => keys,
            RowSpec::Line(line) => line.split_whitespace().map(str::to_string).collect(),
        }
    }
}

/// A parsed layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub base: SpecNode,
    pub modifiers: Vec<(String, ModifierSpec)>,
    pub rows: Option<RowLayout>,
    pub groups: Vec<(String, String)>,
    pub literals: Vec<(String, String)>,
    pub overrides: Vec<(String, SpecNode)>,
}

impl LayoutDocument {
    pub fn load(path: &Path) -> XkbgenResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| XkbgenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> XkbgenResult<Self> {
        let value: Value = serde_yaml_ng::from_str(content)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> XkbgenResult<Self> {
        let Value::Mapping(top) = value else {
            return Err(XkbgenError::Type {
                context: "the document top level".to_string(),
                found: yaml_type_name(value).to_string(),
            });
        };

        let mut base = None;
        let mut modifiers = None;
        let mut rows = None;
        let mut groups = Vec::new();
        let mut literals = Vec::new();
        let mut overrides = Vec::new();

        for (key, section) in top {
            let name = scalar_text(key).ok_or_else(|| XkbgenError::Type {
                context: "a top-level key".to_string(),
                found: yaml_type_name(key).to_string(),
            })?;
            match name.as_str() {
                BASE_SECTION => base = Some(SpecNode::from_yaml(section, BASE_SECTION)?),
                MODIFIERS_SECTION => modifiers = Some(parse_modifiers(section)?),
                ROWS_SECTION => rows = Some(parse_rows(section)?),
                GROUPS_SECTION => groups = string_pairs(section, GROUPS_SECTION)?,
                LITERALS_SECTION => literals = string_pairs(section, LITERALS_SECTION)?,
                _ => {
                    let node = SpecNode::from_yaml(section, &name)?;
                    overrides.push((name, node));
                }
            }
        }

        match (base, modifiers) {
            (Some(base), Some(modifiers)) => Ok(Self {
                base,
                modifiers,
                rows,
                groups,
                literals,
                overrides,
            }),
            _ => Err(XkbgenError::structural(
                "BASE and MODIFIERS sections are mandatory",
            )),
        }
    }
}

fn section_mapping<'v>(section: &'v Value, name: &str) -> XkbgenResult<Option<&'v Mapping>> {
    match section {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(mapping)),
        other => Err(XkbgenError::Type {
            context: format!("section {name}"),
            found: yaml_type_name(other).to_string(),
        }),
    }
}

fn parse_modifiers(section: &Value) -> XkbgenResult<Vec<(String, ModifierSpec)>> {
    let Some(mapping) = section_mapping(section, MODIFIERS_SECTION)? else {
        return Ok(Vec::new());
    };
    mapping
        .iter()
        .map(|(key, value)| {
            let name = scalar_text(key).ok_or_else(|| XkbgenError::Type {
                context: format!("a key in {MODIFIERS_SECTION}"),
                found: yaml_type_name(key).to_string(),
            })?;
            let spec = serde_yaml_ng::from_value(value.clone()).map_err(|e| {
                XkbgenError::structural(format!("invalid modifier '{name}': {e}"))
            })?;
            Ok((name, spec))
        })
        .collect()
}

fn parse_rows(section: &Value) -> XkbgenResult<RowLayout> {
    let rows: Vec<RowSpec> = serde_yaml_ng::from_value(section.clone())
        .map_err(|e| XkbgenError::structural(format!("invalid {ROWS_SECTION} section: {e}")))?;
    Ok(RowLayout::new(rows.into_iter().map(RowSpec::into_keys)))
}

fn string_pairs(section: &Value, name: &str) -> XkbgenResult<Vec<(String, String)>> {
    let Some(mapping) = section_mapping(section, name)? else {
        return Ok(Vec::new());
    };
    mapping
        .iter()
        .map(|(key, value)| match (scalar_text(key), scalar_text(value)) {
            (Some(key), Some(value)) => Ok((key, value)),
            (Some(key), None) => Err(XkbgenError::Type {
                context: format!("{name}.{key}"),
                found: yaml_type_name(value).to_string(),
            }),
            (None, _) => Err(XkbgenError::Type {
                context: format!("a key in {name}"),
                found: yaml_type_name(key).to_string(),
            }),
        })
        .collect()
}
