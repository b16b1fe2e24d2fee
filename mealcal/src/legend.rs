//! Ingredient legend: search filtering, selection, and ordering.

use std::collections::BTreeSet;

use crate::color::Hsl;
use crate::color_manager::ColorManager;

pub const COLLAPSED_VISIBLE: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn highlights(&self, name: &str) -> bool {
        self.is_empty() || self.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendRow<'a> {
    pub name: &'a str,
    pub color: Hsl,
    pub selected: bool,
}

/// Legend rows whose name contains `search` (case-insensitive), selected
/// ingredients first and each group sorted by name ignoring case.
pub fn legend_entries<'a>(
    colors: &'a ColorManager,
    search: &str,
    selection: &Selection,
) -> Vec<LegendRow<'a>> {
    let needle = search.to_lowercase();

    let mut rows: Vec<LegendRow<'a>> = colors
        .assignments()
        .into_iter()
        .filter(|(name, _)| name.to_lowercase().contains(&needle))
        .map(|(name, color)| LegendRow {
            name,
            color,
            selected: selection.contains(name),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.selected
            .cmp(&a.selected)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(b.name))
    });
    rows
}

pub fn hidden_when_collapsed(rows: usize) -> usize {
    rows.saturating_sub(COLLAPSED_VISIBLE)
}
