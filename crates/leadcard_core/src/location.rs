//! Reads and rewrites the `industry` query parameter of the app location.
use url::Url;

pub const INDUSTRY_PARAM: &str = "industry";

/// The `industry` parameter, if present and non-blank.
pub fn industry_from_location(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == INDUSTRY_PARAM)
        .and_then(|(_, value)| crate::normalize_filter(Some(&*value)))
}

/// Copy of `location` with `industry` set to `industry`, or removed when `None`.
///
/// Other parameters keep their order. An emptied query leaves no trailing `?`.
pub fn location_with_industry(location: &Url, industry: Option<&str>) -> Url {
    let kept: Vec<(String, String)> = location
        .query_pairs()
        .filter(|(key, _)| key != INDUSTRY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut next = location.clone();
    next.set_query(None);
    if kept.is_empty() && industry.is_none() {
        return next;
    }

    {
        let mut pairs = next.query_pairs_mut();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if let Some(industry) = industry {
            pairs.append_pair(INDUSTRY_PARAM, industry);
        }
    }
    next
}
