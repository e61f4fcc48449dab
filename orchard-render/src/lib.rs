//! Rendering helpers (plain text, JSON) for fruit, pickers and rankings.

use anyhow::Context;
use orchard_domain::{Picker, RankKey, Ranking};
use orchard_types::Fruit;
use serde::Serialize;

/// `[sweet large healthy]`
pub fn render_fruit(fruit: &Fruit) -> String {
    format!("[{} {} {}]", fruit.taste(), fruit.size(), fruit.quality())
}

/// The picker's name, then one tab-indented line per fruit in picking order.
pub fn render_picker(picker: &Picker) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", picker.name()));
    for fruit in picker.fruits() {
        out.push_str(&format!("\t{}\n", render_fruit(fruit)));
    }
    out
}

/// Every picker in rank order. An empty ranking renders as an empty string.
pub fn render_ranking(ranking: &Ranking) -> String {
    ranking.iter().map(render_picker).collect()
}

#[derive(Debug, Serialize)]
struct PickerSnapshot<'a> {
    position: usize,
    name: &'a str,
    counts: CountsSnapshot,
    fruits: Vec<&'a Fruit>,
}

#[derive(Debug, Serialize)]
struct CountsSnapshot {
    total: usize,
    healthy: usize,
    sweet: usize,
    large: usize,
    medium: usize,
    small: usize,
}

impl From<RankKey> for CountsSnapshot {
    fn from(key: RankKey) -> Self {
        Self {
            total: key.total,
            healthy: key.healthy,
            sweet: key.sweet,
            large: key.large,
            medium: key.medium,
            small: key.small,
        }
    }
}

/// JSON array with one entry per picker, positions starting at 1.
pub fn ranking_to_json(ranking: &Ranking) -> anyhow::Result<serde_json::Value> {
    let snapshots: Vec<PickerSnapshot<'_>> = ranking
        .iter()
        .enumerate()
        .map(|(i, picker)| PickerSnapshot {
            position: i + 1,
            name: picker.name(),
            counts: picker.rank_key().into(),
            fruits: picker.fruits().collect(),
        })
        .collect();
    serde_json::to_value(&snapshots).context("serialize ranking")
}

/// [`ranking_to_json`], pretty-printed.
pub fn render_ranking_json(ranking: &Ranking) -> anyhow::Result<String> {
    let value = ranking_to_json(ranking)?;
    serde_json::to_string_pretty(&value).context("format ranking json")
}
