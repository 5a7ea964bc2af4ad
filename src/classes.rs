use crate::config::TokenTable;

/// Converts utility class strings into `sx` object literals.
#[derive(Debug)]
pub struct ClassMapper<'a> {
    table: &'a TokenTable,
}

impl<'a> ClassMapper<'a> {
    pub fn new(table: &'a TokenTable) -> Self {
        Self { table }
    }

    /// Resolves each mapped token in order. Unmapped tokens are skipped.
    pub fn declarations(&self, classes: &str) -> Vec<&'a str> {
        classes
            .split_whitespace()
            .filter_map(|token| self.table.get(token).map(String::as_str))
            .collect()
    }

    /// Returns `sx={{ ... }}` when at least one token maps, otherwise the
    /// original `className` attribute.
    pub fn convert(&self, classes: &str) -> String {
        let parts = self.declarations(classes);
        if parts.is_empty() {
            return format!("className=\"{classes}\"");
        }
        format!("sx={{{{ {} }}}}", parts.join(", "))
    }
}
