//! Object substitution table used by the auto-fix rewriter.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use super::resource::read_resource_text;

/// Ordered mapping of literal source tokens to replacement tokens.
///
/// File order is preserved because substitutions are applied pair by pair
/// and the order is observable in the rewritten output. A repeated source
/// token keeps its first position but takes the latest replacement.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    pairs: Vec<(String, String)>,
}

impl ConversionTable {
    /// An empty table; substitution becomes a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate `(source, replacement)` pairs in file order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(old, new)| (old.as_str(), new.as_str()))
    }

    fn insert(&mut self, old: &str, new: &str) {
        match self.pairs.iter_mut().find(|(existing, _)| existing == old) {
            Some(pair) => pair.1 = new.to_string(),
            None => self.pairs.push((old.to_string(), new.to_string())),
        }
    }
}

/// Parse conversion entries of the form `old, new`, one per line.
///
/// Blank lines and `#` comments are skipped; a line that does not split into
/// two non-empty parts is skipped with a warning.
pub fn parse_conversions(text: &str) -> ConversionTable {
    let mut table = ConversionTable::empty();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((old, new)) = line.split_once(',') else {
            warn!("Invalid conversion line: {line:?}");
            continue;
        };
        let (old, new) = (old.trim(), new.trim());
        if old.is_empty() || new.is_empty() {
            warn!("Invalid conversion line: {line:?}");
            continue;
        }
        table.insert(old, new);
    }
    table
}

/// Read the substitution table from disk.
pub fn read_conversions(path: &Path) -> Result<ConversionTable> {
    let text = read_resource_text(path)
        .with_context(|| format!("conversion table not available at {}", path.display()))?;
    let table = parse_conversions(&text);
    debug!("Loaded {} conversion entries", table.len());
    Ok(table)
}
