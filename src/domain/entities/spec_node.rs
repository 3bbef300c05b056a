//! Specification nodes: the layout tree after YAML decoding.

use serde_yaml_ng::Value;

use crate::error::{XkbgenError, XkbgenResult};

/// One node of a layout specification.
///
/// Mapping keys keep document order, which decides resolution order and
/// therefore which of two conflicting assignments wins.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecNode {
    Mapping(Vec<(String, SpecNode)>),
    Sequence(Vec<SpecNode>),
    Scalar(String),
    Null,
}

impl SpecNode {
    /// Convert a YAML value, naming `path` in errors.
    ///
    /// Numbers and booleans are scalars in their textual form. Tagged values
    /// are rejected.
    pub fn from_yaml(value: &Value, path: &str) -> XkbgenResult<Self> {
        match value {
            Value::Null => Ok(SpecNode::Null),
            Value::Bool(b) => Ok(SpecNode::Scalar(b.to_string())),
            Value::Number(n) => Ok(SpecNode::Scalar(n.to_string())),
            Value::String(s) => Ok(SpecNode::Scalar(s.clone())),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| SpecNode::from_yaml(item, &format!("{path}[{i}]")))
                .collect::<XkbgenResult<Vec<_>>>()
                .map(SpecNode::Sequence),
            Value::Mapping(mapping) => {
                let mut entries = Vec::with_capacity(mapping.len());
                for (key, child) in mapping {
                    let key = scalar_text(key).ok_or_else(|| XkbgenError::Type {
                        context: format!("a key in {path}"),
                        found: yaml_type_name(key).to_string(),
                    })?;
                    let node = SpecNode::from_yaml(child, &format!("{path}.{key}"))?;
                    entries.push((key, node));
                }
                Ok(SpecNode::Mapping(entries))
            }
            Value::Tagged(_) => Err(XkbgenError::Type {
                context: path.to_string(),
                found: yaml_type_name(value).to_string(),
            }),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SpecNode::Mapping(_) => "mapping",
            SpecNode::Sequence(_) => "sequence",
            SpecNode::Scalar(_) => "string",
            SpecNode::Null => "null",
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            SpecNode::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Textual form of a YAML scalar usable as a mapping key or symbol.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
