//! Generic table controls shared by list views: title filter, single-column
//! sort and column definitions.

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SortDir { #[default] Asc, Desc }

#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    pub column: String,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        SortSpec {
            column: sort.unwrap_or("").to_string(),
            dir: if dir == Some("desc") { SortDir::Desc } else { SortDir::Asc },
        }
    }
    pub fn is_active(&self, column: &str) -> bool {
        !self.column.is_empty() && self.column == column
    }
    pub fn dir_str(&self) -> &'static str {
        match self.dir { SortDir::Asc => "asc", SortDir::Desc => "desc" }
    }
    pub fn toggle_dir(&self) -> &'static str {
        match self.dir { SortDir::Asc => "desc", SortDir::Desc => "asc" }
    }
    /// Direction a header link should request: flip the active column,
    /// start any other column ascending.
    pub fn next_dir_for(&self, column: &str) -> &'static str {
        if self.is_active(column) { self.toggle_dir() } else { "asc" }
    }
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn text_matches(haystack: &str, query: &str) -> bool {
    let q = query.trim();
    q.is_empty() || haystack.to_lowercase().contains(&q.to_lowercase())
}

/// Ordered column definition passed to templates.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Link target for the header when sortable.
    pub href: String,
    /// `""`, `"asc"` or `"desc"` for the active column indicator.
    pub indicator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_spec_from_params() {
        let s = SortSpec::from_params(Some("title"), Some("desc"));
        assert_eq!(s.column, "title");
        assert_eq!(s.dir, SortDir::Desc);
        assert_eq!(s.toggle_dir(), "asc");
    }

    #[test]
    fn sort_spec_defaults_when_none() {
        let s = SortSpec::from_params(None, None);
        assert_eq!(s.column, "");
        assert_eq!(s.dir, SortDir::Asc);
        assert_eq!(s.dir_str(), "asc");
        assert!(!s.is_active(""));
    }

    #[test]
    fn header_links_toggle_only_active_column() {
        let s = SortSpec::from_params(Some("price"), Some("asc"));
        assert_eq!(s.next_dir_for("price"), "desc");
        assert_eq!(s.next_dir_for("doi"), "asc");
    }

    #[test]
    fn text_match_is_case_insensitive_substring() {
        assert!(text_matches("Quantum Effects in Graphene", "graphene"));
        assert!(text_matches("Quantum Effects", "  "));
        assert!(!text_matches("Quantum Effects", "neutrino"));
    }
}
