/// Case-insensitive substring filter over a single text key.
///
/// The term is matched as typed, surrounding spaces included; only an empty
/// term keeps everything. Records whose key is missing never match a non-empty
/// term. The input slice is left untouched.
pub fn filter_by_key<T, F>(items: &[T], term: &str, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Option<&str>,
{
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            key(item)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
