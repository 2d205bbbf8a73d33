use crate::error::Result;
use crate::model::{FilterValue, Label};
use regex::Regex;
use std::collections::BTreeMap;

/// One configured special filter: canonical lowercased key, original-case
/// display name, and the label pattern `<name> - <value>` (case-insensitive,
/// whitespace-tolerant around the separator).
#[derive(Debug, Clone)]
struct Filter {
    key: String,
    display: String,
    pattern: Regex,
}

/// The set of configured special filters, parsed once from the
/// whitespace-separated configuration string.
#[derive(Debug, Clone, Default)]
pub struct SpecialFilters {
    filters: Vec<Filter>,
}

impl SpecialFilters {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut filters = Vec::new();

        for name in raw.split_whitespace() {
            let pattern = Regex::new(&format!(r"(?i)^{}\s*-\s*(.+)$", regex::escape(name)))?;
            filters.push(Filter {
                key: name.to_lowercase(),
                display: name.to_string(),
                pattern,
            });
        }

        Ok(Self { filters })
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate configured filters as (lowercased key, original-case name).
    pub fn names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|f| (f.key.as_str(), f.display.as_str()))
    }

    /// Match every filter against the same immutable label snapshot; return
    /// the labels left unmatched by any filter plus the per-filter captures.
    ///
    /// A label matching more than one filter's pattern contributes its
    /// captured value to each of them, and is removed from the remaining
    /// list exactly once. A filter with no matching label records `None`,
    /// not an empty list.
    pub fn extract(&self, labels: Vec<Label>) -> (Vec<Label>, BTreeMap<String, FilterValue>) {
        let mut values = BTreeMap::new();
        let mut matched = vec![false; labels.len()];

        for filter in &self.filters {
            let mut captured = Vec::new();
            for (i, label) in labels.iter().enumerate() {
                if let Some(caps) = filter.pattern.captures(&label.name) {
                    captured.push(caps[1].to_string());
                    matched[i] = true;
                }
            }

            values.insert(
                filter.key.clone(),
                FilterValue {
                    name: filter.display.clone(),
                    value: if captured.is_empty() {
                        None
                    } else {
                        Some(captured)
                    },
                },
            );
        }

        let remaining = labels
            .into_iter()
            .zip(matched)
            .filter(|(_, hit)| !hit)
            .map(|(label, _)| label)
            .collect();

        (remaining, values)
    }
}
