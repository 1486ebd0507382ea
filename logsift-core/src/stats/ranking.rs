use crate::stats::KeyCount;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// The `n` most frequent keys, highest count first. Equal counts are ordered
/// by key so the output is reproducible.
pub fn top_n<S: BuildHasher>(counts: &HashMap<String, u64, S>, n: usize) -> Vec<KeyCount> {
    let mut items: Vec<KeyCount> = counts
        .iter()
        .map(|(value, count)| KeyCount {
            value: value.clone(),
            count: *count,
        })
        .collect();

    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    items.truncate(n);
    items
}
