use std::cmp;
use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use crate::color::{distance, Hsl};
use crate::palette::{self, BASE_PALETTE};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Hands out ingredient colors, each new one as far as possible in RGB
/// space from the colors already handed out.
///
/// Assignments are permanent for the lifetime of the manager. Build a new
/// manager when the ingredient set changes.
#[derive(Clone, Debug)]
pub struct ColorManager {
    assigned: HashMap<String, Hsl>,
    used: HashSet<Hsl>,
    available: Vec<Hsl>,
}

impl ColorManager {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = distinct_names(names);
        let size = cmp::max(BASE_PALETTE.len(), names.len());

        let mut manager = Self {
            assigned: HashMap::with_capacity(names.len()),
            used: HashSet::with_capacity(names.len()),
            available: palette::generate(size),
        };
        manager.seed(&names);
        manager
    }

    pub fn with_palette<I, S>(palette: Vec<Hsl>, names: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if palette.is_empty() {
            return Err(ColorError::EmptyPalette);
        }

        let mut manager = Self {
            assigned: HashMap::new(),
            used: HashSet::new(),
            available: palette,
        };
        manager.seed(names);
        Ok(manager)
    }

    pub fn seed<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.get_color(name.as_ref());
        }
    }

    pub fn get_color(&mut self, name: &str) -> Hsl {
        if let Some(color) = self.assigned.get(name) {
            return *color;
        }

        let (color, score) = self.select();
        if score < 0.0 {
            debug!(ingredient = name, %color, "palette exhausted, reusing color");
        } else {
            debug!(ingredient = name, %color, score, "assigned ingredient color");
        }

        self.assigned.insert(name.to_string(), color);
        self.used.insert(color);
        color
    }

    pub fn get(&self, name: &str) -> Option<Hsl> {
        self.assigned.get(name).copied()
    }

    pub fn assignments(&self) -> BTreeMap<&str, Hsl> {
        self.assigned
            .iter()
            .map(|(name, color)| (name.as_str(), *color))
            .collect()
    }

    pub fn palette(&self) -> &[Hsl] {
        &self.available
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Maximin pick over the unused palette entries. Ties go to the earliest
    /// entry. With nothing left unused the first entry comes back with a
    /// score of -1.
    fn select(&self) -> (Hsl, f64) {
        let mut best = self.available[0];
        let mut best_score = -1.0;

        for &candidate in &self.available {
            if self.used.contains(&candidate) {
                continue;
            }

            let score = self
                .used
                .iter()
                .map(|&used| distance(candidate, used))
                .fold(f64::INFINITY, f64::min);

            if score > best_score {
                best = candidate;
                best_score = score;
            }
        }

        (best, best_score)
    }
}

impl Default for ColorManager {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

fn distinct_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for name in names {
        let name = name.as_ref();
        if seen.insert(name.to_string()) {
            distinct.push(name.to_string());
        }
    }
    distinct
}
