use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use super::revenue::Revenue;

/// Which fields make up the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// Group by date and primary client. Records of differing types may end
    /// up merged; the first record's type wins.
    DateClient,
    /// Group by date, primary client and type.
    DateClientType,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
struct GroupKey {
    date: String,
    client: String,
    kind: Option<String>,
}

impl GroupKey {
    /// `None` for records without a primary client, which never group.
    fn of(revenue: &Revenue, mode: KeyMode) -> Option<Self> {
        let client = revenue.primary_client()?.to_owned();
        Some(Self {
            date: revenue.date.clone(),
            client,
            kind: match mode {
                KeyMode::DateClient => None,
                KeyMode::DateClientType => Some(revenue.kind.clone()),
            },
        })
    }
}

/// Merge all revenues sharing a grouping key into single records and return
/// the result sorted by date.
///
/// Each group is emitted once, at the input position of its first member;
/// later members of the same group are dropped from the output. Singleton
/// groups and records without a primary client pass through unchanged. The
/// final sort is stable, so records sharing a date keep that relative order.
pub fn squash(revenues: Vec<Revenue>, mode: KeyMode) -> Vec<Revenue> {
    let mut groups: HashMap<GroupKey, Vec<usize>> = HashMap::new();
    for (index, revenue) in revenues.iter().enumerate() {
        if let Some(key) = GroupKey::of(revenue, mode) {
            groups.entry(key).or_default().push(index);
        }
    }

    let mut processed: HashSet<GroupKey> = HashSet::new();
    let mut squashed = Vec::new();

    for revenue in &revenues {
        let Some(key) = GroupKey::of(revenue, mode) else {
            squashed.push(revenue.clone());
            continue;
        };

        if !processed.insert(key.clone()) {
            continue;
        }

        let group: Vec<&Revenue> = groups[&key].iter().map(|&i| &revenues[i]).collect();
        match group.as_slice() {
            [only] => squashed.push((*only).clone()),
            _ => squashed.push(merge(&key, &group)),
        }
    }

    squashed.sort_by(|a, b| a.date.cmp(&b.date));
    squashed
}

fn merge(key: &GroupKey, group: &[&Revenue]) -> Revenue {
    let first = group[0];

    let comments = group
        .iter()
        .filter_map(|revenue| revenue.comments.as_deref())
        .filter(|comment| !comment.is_empty())
        .join(", ");

    Revenue {
        id: first.id,
        source: summarize_sources(group),
        amount: group.iter().map(|revenue| revenue.amount).sum(),
        date: key.date.clone(),
        kind: key.kind.clone().unwrap_or_else(|| first.kind.clone()),
        clients: vec![key.client.clone()],
        comments: Some(comments),
    }
}

/// Tally sources in first-seen order: a value appearing once is kept
/// verbatim, repeated values become `"<value> x<count>"`.
fn summarize_sources(group: &[&Revenue]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for revenue in group {
        match counts.iter_mut().find(|(source, _)| *source == revenue.source) {
            Some((_, count)) => *count += 1,
            None => counts.push((&revenue.source, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(source, count)| {
            if count > 1 {
                format!("{source} x{count}")
            } else {
                source.to_owned()
            }
        })
        .join(", ")
}
