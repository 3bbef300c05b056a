//! Row layout: physical keys ordered into keyboard rows.

use super::KeyToken;

/// Rows of key tokens from the ROWS section, top row first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowLayout {
    rows: Vec<Vec<KeyToken>>,
}

impl RowLayout {
    pub fn new<R, K>(rows: R) -> Self
    where
        R: IntoIterator<Item = Vec<K>>,
        K: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.iter().map(|k| KeyToken::parse(k.as_ref())).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<KeyToken>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
