use crate::render;
use crate::types::{FeaturedArg, OutputFormat, SortArg};
use anyhow::{Context, Result};
use headshakers_engine::{codec, ListController};
use headshakers_types::{FeaturedFilter, Item, PageSize, SortOption};
use std::collections::BTreeMap;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn handle(
    items_path: &Path,
    query: Option<String>,
    search: Option<String>,
    category: Option<String>,
    condition: Option<String>,
    featured: Option<FeaturedArg>,
    sort: Option<SortArg>,
    page: Option<usize>,
    page_size: Option<usize>,
    default_page_size: usize,
    format: OutputFormat,
) -> Result<()> {
    let items = load_items(items_path)?;

    // Build one parameter map: query string first, explicit flags on top.
    let mut params = query.as_deref().map(parse_query).unwrap_or_default();

    if let Some(search) = search {
        params.insert(codec::PARAM_SEARCH.to_string(), search);
    }
    if let Some(category) = category {
        params.insert(codec::PARAM_CATEGORY.to_string(), category);
    }
    if let Some(condition) = condition {
        params.insert(codec::PARAM_CONDITION.to_string(), condition);
    }
    if let Some(featured) = featured {
        let featured: FeaturedFilter = featured.into();
        params.insert(codec::PARAM_FEATURED.to_string(), featured.as_str().to_string());
    }
    if let Some(sort) = sort {
        let sort: SortOption = sort.into();
        params.insert(codec::PARAM_SORT.to_string(), sort.as_str().to_string());
    }
    if let Some(page) = page {
        params.insert(codec::PARAM_PAGE.to_string(), page.to_string());
    }
    if let Some(page_size) = page_size {
        params.insert(codec::PARAM_PAGE_SIZE.to_string(), page_size.to_string());
    }

    let explicit_page_size = params.contains_key(codec::PARAM_PAGE_SIZE);
    let mut state = codec::decode(&params);

    // The persisted preference only fills the gap; it never overrides.
    if !explicit_page_size
        && let Some(size) = PageSize::from_count(default_page_size)
    {
        state.page.page_size = size;
    }

    let controller = ListController::with_state(items, state);
    render::render_view(&controller.view(), format)
}

pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read collection export {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse collection export {}", path.display()))?;
    Ok(items)
}

/// Split a "k=v&k=v" query string into a parameter map.
///
/// Malformed fragments (no `=`, empty key) are dropped silently: stale or
/// mangled URL state degrades, it never errors.
fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
