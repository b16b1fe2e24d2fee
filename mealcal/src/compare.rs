use std::collections::HashMap;

use crate::meal::Meal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    FirstHigher,
    SecondHigher,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub ingredient: String,
    pub first: f64,
    pub second: f64,
}

impl ComparisonRow {
    pub fn difference(&self) -> f64 {
        (self.first - self.second).abs()
    }

    pub fn direction(&self) -> Option<Direction> {
        if self.first > self.second {
            Some(Direction::FirstHigher)
        } else if self.first < self.second {
            Some(Direction::SecondHigher)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealComparison {
    rows: Vec<ComparisonRow>,
}

impl MealComparison {
    /// Rows list the first meal's ingredients, then those only the second
    /// meal uses. An ingredient listed twice in one meal keeps its last
    /// amount.
    pub fn new(first: &Meal, second: &Meal) -> Self {
        let mut rows: Vec<ComparisonRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for ingredient in &first.ingredients {
            match index.get(ingredient.name.as_str()) {
                Some(&position) => rows[position].first = ingredient.amount,
                None => {
                    index.insert(&ingredient.name, rows.len());
                    rows.push(ComparisonRow {
                        ingredient: ingredient.name.clone(),
                        first: ingredient.amount,
                        second: 0.0,
                    });
                }
            }
        }

        for ingredient in &second.ingredients {
            match index.get(ingredient.name.as_str()) {
                Some(&position) => rows[position].second = ingredient.amount,
                None => {
                    index.insert(&ingredient.name, rows.len());
                    rows.push(ComparisonRow {
                        ingredient: ingredient.name.clone(),
                        first: 0.0,
                        second: ingredient.amount,
                    });
                }
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn max_amount(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.first.max(row.second))
            .fold(0.0, f64::max)
    }

    pub fn shares(&self, row: &ComparisonRow) -> (f64, f64) {
        let max = self.max_amount();
        if max <= 0.0 {
            return (0.0, 0.0);
        }
        (row.first / max, row.second / max)
    }

    pub fn key_differences(&self) -> impl Iterator<Item = (&ComparisonRow, Direction)> {
        self.rows
            .iter()
            .filter_map(|row| row.direction().map(|direction| (row, direction)))
    }
}
