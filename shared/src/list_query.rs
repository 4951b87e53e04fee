//! URL-backed state of a list screen and its mapping to API parameters.

use serde::{Deserialize, Deserializer, Serialize};

use crate::pagination;

/// Name of the free-text parameter on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchParam {
    /// `search`.
    Search,
    /// `title`.
    Title,
}

impl SearchParam {
    /// Query parameter name.
    pub const fn key(self) -> &'static str {
        match self {
            SearchParam::Search => "search",
            SearchParam::Title => "title",
        }
    }
}

/// Per-screen configuration of the list-filter-paginate flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Quiet period before typed search text reaches the URL.
    pub debounce_ms: u32,
    /// Page size when the URL has none.
    pub default_page_size: usize,
    /// How the server names the search parameter.
    pub search_param: SearchParam,
    /// Sizes offered by a page-size selector; empty hides the selector.
    pub page_size_options: &'static [usize],
}

/// Upper bound on `pageSize` taken from the URL.
pub const MAX_PAGE_SIZE: usize = 100;

impl ListConfig {
    /// Defaults: 500 ms debounce, `search` parameter, no size selector.
    pub const fn new(default_page_size: usize) -> Self {
        Self {
            debounce_ms: 500,
            default_page_size,
            search_param: SearchParam::Search,
            page_size_options: &[],
        }
    }

    /// Override the debounce window.
    pub const fn with_debounce(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Override the search parameter name.
    pub const fn with_search_param(mut self, search_param: SearchParam) -> Self {
        self.search_param = search_param;
        self
    }

    /// Offer a page-size selector with `options`.
    pub const fn with_page_sizes(mut self, options: &'static [usize]) -> Self {
        self.page_size_options = options;
        self
    }
}

/// Query string of a list page: `?search=&category=&page=&pageSize=`.
///
/// Unparsable numbers in the URL are treated as absent rather than failing
/// the whole query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Free-text filter.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub search: String,
    /// Category id filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// One-based page.
    #[serde(default, deserialize_with = "lenient_usize", skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Items per page.
    #[serde(default, deserialize_with = "lenient_usize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

fn lenient_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0))
}

impl ListQuery {
    /// Trim text filters and drop empty or zero values.
    pub fn normalized(mut self) -> Self {
        self.search = self.search.trim().to_string();
        self.category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        self.page = self.page.filter(|p| *p > 0);
        self.page_size = self.page_size.filter(|s| *s > 0);
        self
    }

    /// Current page, at least one.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, capped at [`MAX_PAGE_SIZE`].
    pub fn page_size(&self, config: &ListConfig) -> usize {
        self.page_size
            .unwrap_or(config.default_page_size)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// New search text; returns `None` when nothing would change so callers
    /// can skip rewriting the URL.
    pub fn with_search(&self, search: &str) -> Option<Self> {
        let search = search.trim();
        if search == self.search {
            return None;
        }
        Some(Self {
            search: search.to_string(),
            page: Some(1),
            ..self.clone()
        })
    }

    /// New category filter; `None` when nothing would change.
    pub fn with_category(&self, category: Option<String>) -> Option<Self> {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if category == self.category {
            return None;
        }
        Some(Self {
            category,
            page: Some(1),
            ..self.clone()
        })
    }

    /// Same filters on another page.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: Some(page.max(1)),
            ..self.clone()
        }
    }

    /// New page size, back on page one.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        Self {
            page_size: Some(page_size.clamp(1, MAX_PAGE_SIZE)),
            page: Some(1),
            ..self.clone()
        }
    }

    /// Query to navigate to when this page lies past the last one.
    ///
    /// `loaded_for` is the query the current `total_pages` was computed
    /// from; a total that belongs to another query never moves the page.
    pub fn clamped(&self, loaded_for: &ListQuery, total_pages: usize) -> Option<Self> {
        if loaded_for != self {
            return None;
        }
        let clamped = pagination::clamp_page(self.page(), total_pages);
        (clamped != self.page()).then(|| self.with_page(clamped))
    }

    /// Parameters for the list endpoint, in the order the API documents them.
    pub fn api_params(&self, config: &ListConfig) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page().to_string()),
            ("limit", self.page_size(config).to_string()),
        ];
        if !self.search.is_empty() {
            params.push((config.search_param.key(), self.search.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}

/// `k=v&k=v` with both sides percent-encoded.
pub fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Raw list reply. Different endpoints name the count `total` or
/// `totalData`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Items of the requested page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Count under its usual name.
    #[serde(default)]
    pub total: Option<usize>,
    /// Count as some endpoints name it; wins when positive.
    #[serde(default)]
    pub total_data: Option<usize>,
}

impl<T> ListResponse<T> {
    /// Normalise into a [`Page`].
    pub fn into_page(self) -> Page<T> {
        let total = self
            .total_data
            .filter(|n| *n > 0)
            .or(self.total)
            .unwrap_or(0);
        Page {
            items: self.data,
            total,
        }
    }
}

/// One page of items plus the server-side total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Matching items across all pages.
    pub total: usize,
}

impl<T> Page<T> {
    /// Page count at `per_page` items each.
    pub fn total_pages(&self, per_page: usize) -> usize {
        pagination::total_pages(self.total, per_page)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ListConfig = ListConfig::new(10);

    #[test]
    fn search_and_category_changes_reset_page() {
        let query = ListQuery {
            page: Some(4),
            ..Default::default()
        };
        let next = query.with_search(" foo ").expect("search changed");
        assert_eq!(next.search, "foo");
        assert_eq!(next.page(), 1);

        let next = next.with_page(3).with_category(Some("7".into())).expect("category changed");
        assert_eq!(next.page(), 1);
        assert_eq!(next.category.as_deref(), Some("7"));
    }

    #[test]
    fn unchanged_filters_report_no_change() {
        let query = ListQuery {
            search: "foo".into(),
            category: Some("2".into()),
            ..Default::default()
        };
        assert!(query.with_search("foo ").is_none());
        assert!(query.with_category(Some("2".into())).is_none());
        assert!(ListQuery::default().with_category(Some("  ".into())).is_none());
    }

    #[test]
    fn api_params_follow_config() {
        let query = ListQuery {
            search: "rust".into(),
            category: Some("c1".into()),
            page: Some(2),
            page_size: None,
        };
        assert_eq!(
            query.api_params(&CONFIG),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("search", "rust".to_string()),
                ("category", "c1".to_string()),
            ]
        );
        let by_title = CONFIG.with_search_param(SearchParam::Title);
        assert!(query.api_params(&by_title).contains(&("title", "rust".to_string())));
    }

    #[test]
    fn empty_filters_are_left_out() {
        let params = ListQuery::default().api_params(&CONFIG);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn page_size_change_resets_page_and_is_capped() {
        let query = ListQuery::default().with_page(5).with_page_size(25);
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(&CONFIG), 25);
        assert_eq!(query.with_page_size(10_000).page_size(&CONFIG), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_past_the_end_clamps_to_last() {
        let query = ListQuery::default().with_page(9);
        let next = query.clamped(&query, 3).expect("out of range");
        assert_eq!(next.page(), 3);
        assert!(next.clamped(&next, 3).is_none());
    }

    #[test]
    fn stale_total_does_not_clamp() {
        // Total of a one-page search result, still on screen while the
        // unfiltered page 4 is loading.
        let searched = ListQuery::default().with_search("rare").expect("search changed");
        let browsing = ListQuery::default().with_page(4);
        assert!(browsing.clamped(&searched, 1).is_none());
        assert_eq!(browsing.clamped(&browsing, 1).map(|q| q.page()), Some(1));
    }

    #[test]
    fn encodes_params_for_urls() {
        let encoded = encode_params(&[("search", "a b&c".to_string()), ("page", "1".into())]);
        assert_eq!(encoded, "search=a%20b%26c&page=1");
    }

    #[test]
    fn total_data_is_preferred_over_total() {
        let raw = r#"{"data":[1,2],"total":9,"totalData":12}"#;
        let page = serde_json::from_str::<ListResponse<u32>>(raw)
            .expect("decode")
            .into_page();
        assert_eq!(page.total, 12);
        assert_eq!(page.items, vec![1, 2]);

        let raw = r#"{"data":[],"total":3}"#;
        assert_eq!(serde_json::from_str::<ListResponse<u32>>(raw).expect("decode").into_page().total, 3);

        let raw = r#"{}"#;
        let page = serde_json::from_str::<ListResponse<u32>>(raw).expect("decode").into_page();
        assert_eq!(page, Page::default());
    }

    #[test]
    fn query_round_trips_through_json_shape() {
        let query: ListQuery =
            serde_json::from_str(r#"{"search":"x","page":"abc","pageSize":"25"}"#).expect("decode");
        assert_eq!(query.page, None);
        assert_eq!(query.page_size, Some(25));
    }
}
