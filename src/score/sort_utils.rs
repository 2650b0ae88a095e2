use ahash::RandomState;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FrequencyEntry<T> {
    pub label: T,
    pub count: u32,
}

/// Counts occurrences and ranks them by descending count. The sort is
/// stable over a first-occurrence-ordered vector, so ties keep the order
/// in which each label first appeared in the input.
#[must_use]
pub fn rank_by_frequency<T>(values: impl IntoIterator<Item = T>) -> Vec<FrequencyEntry<T>>
where
    T: Clone + Eq + Hash,
{
    let mut counts: HashMap<T, u32, RandomState> = HashMap::default();
    let mut order: Vec<T> = Vec::new();

    for value in values {
        if !counts.contains_key(&value) {
            order.push(value.clone());
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut ranked: Vec<FrequencyEntry<T>> = order
        .into_iter()
        .map(|label| {
            let count = counts.get(&label).copied().unwrap_or(0);
            FrequencyEntry { label, count }
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
