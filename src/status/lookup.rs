use serde_json::Value;

/// Walks `keys` from `value`, returning `None` at the first missing key or
/// non-object node.
pub fn descend<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(value, |node, key| node.as_object()?.get(*key))
}

/// Like [`descend`], but only yields string leaves.
pub fn text<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    descend(value, keys)?.as_str()
}

pub fn contains_all(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().all(|needle| haystack.contains(needle))
}
