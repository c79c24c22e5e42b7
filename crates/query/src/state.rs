//! Per-screen query state: search, filters, pagination, sort.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub column: String,
    pub direction: SortDirection,
}

/// The filter/sort/page parameters governing one list screen.
///
/// Owned exclusively by that screen; reset to defaults on mount. Every
/// mutator reports whether the state actually changed, which is the
/// screen's cue to issue a fetch (debounced for free-text search, immediate
/// for everything else).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    search: String,
    filters: BTreeMap<String, String>,
    page: u32,
    per_page: u32,
    sort: Option<Sort>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn new(per_page: u32) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            per_page: per_page.max(1),
            sort: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.search {
            return false;
        }
        self.search = search;
        true
    }

    /// Set or clear a named filter. An empty value clears, matching the
    /// "all" option of a dropdown.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            return self.filters.remove(&key).is_some();
        }
        self.filters.insert(key, value.clone()) != Some(value)
    }

    pub fn clear_filters(&mut self) -> bool {
        let changed = !self.filters.is_empty() || !self.search.is_empty();
        self.filters.clear();
        self.search.clear();
        changed
    }

    /// Request a page change, clamped against the known page count.
    ///
    /// Out-of-range requests never reach the server: the page is clamped
    /// into `[1, total_pages]` locally and the fetch only fires when the
    /// clamped value differs from the current page.
    pub fn set_page(&mut self, requested: u32, total_pages: Option<u32>) -> bool {
        let mut page = requested.max(1);
        if let Some(total) = total_pages {
            if total >= 1 {
                page = page.min(total);
            }
        }
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Cycle the sort on `column`: unset → ascending → descending → unset.
    /// Switching to a different column starts over at ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Asc => Some(Sort {
                    column: sort.column,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(Sort {
                column: column.to_string(),
                direction: SortDirection::Asc,
            }),
        };
    }

    /// Query parameters for a list fetch: all non-empty fields only.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        params.extend(self.filter_params());
        params
    }

    /// Parameters for an export: the current filters minus pagination.
    pub fn export_params(&self) -> Vec<(String, String)> {
        self.filter_params()
    }

    fn filter_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search".to_string(), self.search.clone()));
        }
        for (key, value) in &self.filters {
            params.push((key.clone(), value.clone()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort_by".to_string(), sort.column.clone()));
            params.push(("sort_dir".to_string(), sort.direction.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direction_of(state: &QueryState) -> Option<(&str, SortDirection)> {
        state.sort().map(|s| (s.column.as_str(), s.direction))
    }

    #[test]
    fn sort_cycles_unset_asc_desc_unset() {
        let mut state = QueryState::default();
        assert_eq!(direction_of(&state), None);

        state.toggle_sort("name");
        assert_eq!(direction_of(&state), Some(("name", SortDirection::Asc)));
        state.toggle_sort("name");
        assert_eq!(direction_of(&state), Some(("name", SortDirection::Desc)));
        state.toggle_sort("name");
        assert_eq!(direction_of(&state), None);
    }

    #[test]
    fn switching_sort_column_resets_to_ascending() {
        let mut state = QueryState::default();
        state.toggle_sort("name");
        state.toggle_sort("name"); // name desc
        state.toggle_sort("email");
        assert_eq!(direction_of(&state), Some(("email", SortDirection::Asc)));
    }

    #[test]
    fn out_of_range_page_is_clamped_and_does_not_fetch() {
        let mut state = QueryState::default();
        assert!(state.set_page(3, Some(3)));
        // Page 5 of 3: clamps back onto the current page, no fetch.
        assert!(!state.set_page(5, Some(3)));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let mut state = QueryState::default();
        state.set_page(2, None);
        assert!(state.set_page(0, None));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn params_carry_only_non_empty_fields() {
        let mut state = QueryState::default();
        let params = state.params();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );

        state.set_search("john d");
        state.set_filter("status", "new");
        state.set_filter("source", "");
        state.toggle_sort("name");

        let params = state.params();
        assert!(params.contains(&("search".to_string(), "john d".to_string())));
        assert!(params.contains(&("status".to_string(), "new".to_string())));
        assert!(params.contains(&("sort_by".to_string(), "name".to_string())));
        assert!(params.contains(&("sort_dir".to_string(), "asc".to_string())));
        assert!(params.iter().all(|(k, _)| k != "source"));
    }

    #[test]
    fn export_params_drop_pagination_but_keep_filters() {
        let mut state = QueryState::default();
        state.set_search("john");
        state.set_filter("status", "new");
        state.set_page(4, None);

        let params = state.export_params();
        assert!(params.iter().all(|(k, _)| k != "page" && k != "per_page"));
        assert!(params.contains(&("search".to_string(), "john".to_string())));
        assert!(params.contains(&("status".to_string(), "new".to_string())));
    }

    #[test]
    fn setting_an_identical_filter_reports_no_change() {
        let mut state = QueryState::default();
        assert!(state.set_filter("status", "new"));
        assert!(!state.set_filter("status", "new"));
        assert!(state.set_filter("status", "contacted"));
        assert!(state.set_filter("status", ""));
        assert!(!state.set_filter("status", ""));
    }
}
