//! Table lookup by language pair.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ConfigurationError;
use crate::language::Language;
use crate::layouts;
use crate::table::LayoutTable;

/// Set of layout tables keyed by `(from, to)`.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegistry {
    tables: HashMap<(Language, Language), LayoutTable>,
}

/// Process-wide registry, built on first use and read-only afterwards.
static REGISTRY: OnceLock<LayoutRegistry> = OnceLock::new();

impl LayoutRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in layout pair.
    ///
    /// QWERTY pairs come from the static key tables. Pairs between two
    /// non-QWERTY layouts are chained through QWERTY key positions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(LayoutTable::from_pairs(Language::Eng, Language::Ukr, layouts::ENG_TO_UKR));
        registry.register(LayoutTable::from_pairs(Language::Ukr, Language::Eng, layouts::UKR_TO_ENG));
        registry.register(LayoutTable::from_pairs(Language::Eng, Language::Rus, layouts::ENG_TO_RUS));
        registry.register(LayoutTable::from_pairs(Language::Rus, Language::Eng, layouts::RUS_TO_ENG));

        for from in Language::ALL {
            for to in Language::ALL {
                if from == to || from == Language::Eng || to == Language::Eng {
                    continue;
                }
                let chained = match (
                    registry.tables.get(&(from, Language::Eng)),
                    registry.tables.get(&(Language::Eng, to)),
                ) {
                    (Some(first), Some(second)) => LayoutTable::compose(first, second),
                    _ => continue,
                };
                registry.register(chained);
            }
        }

        registry
    }

    /// Shared built-in registry.
    pub fn global() -> &'static LayoutRegistry {
        REGISTRY.get_or_init(LayoutRegistry::builtin)
    }

    /// Add a table, replacing any table for the same pair.
    pub fn register(&mut self, table: LayoutTable) -> Option<LayoutTable> {
        self.tables.insert((table.source(), table.target()), table)
    }

    /// Table for the exact ordered pair.
    pub fn table(&self, from: Language, to: Language) -> Result<&LayoutTable, ConfigurationError> {
        self.tables
            .get(&(from, to))
            .ok_or(ConfigurationError::MissingTable { from, to })
    }

    /// Registered pairs in sorted order.
    pub fn pairs(&self) -> Vec<(Language, Language)> {
        let mut pairs: Vec<_> = self.tables.keys().copied().collect();
        pairs.sort();
        pairs
    }

    /// Rewrite `input` as if it had been typed under `to` instead of `from`.
    ///
    /// Each character is looked up on its own; characters absent from the
    /// table are kept. Equal languages return the input unchanged without
    /// consulting the table set.
    pub fn transform(&self, input: &str, from: Language, to: Language) -> Result<String, ConfigurationError> {
        if from == to {
            return Ok(input.to_string());
        }

        let table = self.table(from, to)?;
        let mut output = String::with_capacity(input.len());
        output.extend(input.chars().map(|ch| table.map_char(ch)));
        Ok(output)
    }
}
