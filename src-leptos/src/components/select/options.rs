//! Option model and pure derivations for the Select control.
//!
//! Filtering and grouping are plain functions of their inputs so they can be
//! recomputed on every change without touching any interaction state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value carried by a select option. Acts as the selection key and is
/// compared structurally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SelectValue {
    Str(String),
    Num(i64),
}

impl fmt::Display for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Num(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SelectValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for SelectValue {
    fn from(value: i64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for SelectValue {
    fn from(value: i32) -> Self {
        Self::Num(i64::from(value))
    }
}

/// One selectable entry. Values must be unique within an option list;
/// with duplicates the first match wins for display purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: SelectValue,
    pub label: String,
    /// Displayed but never selectable
    pub disabled: bool,
    /// Secondary line under the label, also matched by the search filter
    pub description: Option<String>,
    /// Display-only decoration, e.g. an emoji
    pub icon: Option<String>,
    /// Options sharing a group render together under a group header
    pub group: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<SelectValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            description: None,
            icon: None,
            group: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Payload of a selection change notification. Carries the new values and
/// their resolved options so consumers can read labels without a second
/// lookup. Options are resolved against the full option list in list order.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub values: Vec<SelectValue>,
    pub options: Vec<SelectOption>,
}

impl SelectionChange {
    /// First selected value, the only one in single mode.
    pub fn single(&self) -> Option<&SelectValue> {
        self.values.first()
    }

    pub fn is_cleared(&self) -> bool {
        self.values.is_empty()
    }
}

/// Subset of options whose label or description contains the term as a
/// case-insensitive substring. An empty term passes everything through.
pub fn filter_options(options: &[SelectOption], term: &str) -> Vec<SelectOption> {
    if term.is_empty() {
        return options.to_vec();
    }
    let needle = term.to_lowercase();
    options
        .iter()
        .filter(|option| {
            option.label.to_lowercase().contains(&needle)
                || option
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// An option paired with its index in the filtered list. The index is what
/// keyboard focus refers to, so grouping must carry it through.
pub type IndexedOption = (usize, SelectOption);

/// Filtered options partitioned for rendering: ungrouped options first,
/// then each group in first-seen order, each preserving list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedOptions {
    pub ungrouped: Vec<IndexedOption>,
    pub groups: Vec<(String, Vec<IndexedOption>)>,
}

impl GroupedOptions {
    pub fn has_groups(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Total option count across all buckets.
    pub fn len(&self) -> usize {
        self.ungrouped.len() + self.groups.iter().map(|(_, bucket)| bucket.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition filtered options into ungrouped and grouped buckets.
pub fn group_options(filtered: &[SelectOption]) -> GroupedOptions {
    let mut grouped = GroupedOptions::default();
    for (index, option) in filtered.iter().enumerate() {
        match &option.group {
            Some(name) => {
                if let Some((_, bucket)) = grouped.groups.iter_mut().find(|(g, _)| g == name) {
                    bucket.push((index, option.clone()));
                } else {
                    grouped.groups.push((name.clone(), vec![(index, option.clone())]));
                }
            }
            None => grouped.ungrouped.push((index, option.clone())),
        }
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn languages() -> Vec<SelectOption> {
        vec![
            SelectOption::new("common", "Common"),
            SelectOption::new("elvish", "Elvish"),
            SelectOption::new("dwarvish", "Dwarvish").with_description("Spoken by dwarves"),
        ]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let options = languages();
        assert_eq!(filter_options(&options, ""), options);
    }

    #[test]
    fn test_filter_matches_label_case_insensitive() {
        let filtered = filter_options(&languages(), "ELV");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Elvish");
    }

    #[test]
    fn test_filter_matches_description() {
        let filtered = filter_options(&languages(), "dwarves");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].value, SelectValue::from("dwarvish"));
    }

    #[test]
    fn test_filter_result_is_subset() {
        let options = languages();
        for term in ["a", "ish", "zzz", "Common"] {
            let filtered = filter_options(&options, term);
            assert!(filtered.iter().all(|o| options.contains(o)));
            let needle = term.to_lowercase();
            assert!(filtered.iter().all(|o| {
                o.label.to_lowercase().contains(&needle)
                    || o.description.as_ref().is_some_and(|d| d.to_lowercase().contains(&needle))
            }));
        }
    }

    #[test]
    fn test_grouping_preserves_count_and_order() {
        let options = vec![
            SelectOption::new("human", "Human").in_group("Common"),
            SelectOption::new("custom", "Custom Race"),
            SelectOption::new("elf", "Elf").in_group("Common"),
            SelectOption::new("tiefling", "Tiefling").in_group("Exotic"),
            SelectOption::new("homebrew", "Homebrew"),
        ];

        let grouped = group_options(&options);

        assert_eq!(grouped.len(), options.len());
        // Ungrouped keep list order and their filtered indexes
        assert_eq!(
            grouped.ungrouped.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![1, 4]
        );
        // Groups in first-seen order
        let names: Vec<&str> = grouped.groups.iter().map(|(g, _)| g.as_str()).collect();
        assert_eq!(names, vec!["Common", "Exotic"]);
        assert_eq!(
            grouped.groups[0].1.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }

    #[test]
    fn test_grouping_without_groups() {
        let grouped = group_options(&languages());
        assert!(!grouped.has_groups());
        assert_eq!(grouped.ungrouped.len(), 3);
    }

    #[test]
    fn test_value_serde_untagged() {
        let s: SelectValue = serde_json::from_str("\"wizard\"").unwrap();
        assert_eq!(s, SelectValue::from("wizard"));

        let n: SelectValue = serde_json::from_str("12").unwrap();
        assert_eq!(n, SelectValue::from(12));
        assert_eq!(n.to_string(), "12");
    }
}
