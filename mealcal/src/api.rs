use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarState;
use crate::color::Hsl;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Hsl,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSwatch {
    pub ingredient: String,
    pub color: Hsl,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSwatches {
    pub date: NaiveDate,
    pub meal_id: String,
    pub meal_name: String,
    pub time: String,
    pub bars: Vec<BarSwatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorExport {
    pub palette_size: usize,
    pub legend: Vec<LegendEntry>,
    pub meals: Vec<MealSwatches>,
}

impl ColorExport {
    pub fn from_state(state: &CalendarState, search: &str) -> Self {
        let colors = state.colors();
        let selection = state.selection();

        let legend = state
            .legend(search)
            .into_iter()
            .map(|row| LegendEntry {
                name: row.name.to_string(),
                color: row.color,
                selected: row.selected,
            })
            .collect();

        let meals = state
            .plan()
            .meals()
            .map(|entry| {
                let relevant: Vec<&str> = entry
                    .meal
                    .ingredient_names()
                    .filter(|name| selection.highlights(name))
                    .collect();
                let share = if relevant.is_empty() {
                    0.0
                } else {
                    1.0 / relevant.len() as f64
                };

                MealSwatches {
                    date: entry.day.date,
                    meal_id: entry.meal.id.clone(),
                    meal_name: entry.meal.name.clone(),
                    time: entry.meal.time.clone(),
                    bars: relevant
                        .into_iter()
                        .filter_map(|name| {
                            colors.get(name).map(|color| BarSwatch {
                                ingredient: name.to_string(),
                                color,
                                share,
                            })
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            palette_size: colors.palette().len(),
            legend,
            meals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_entry_serializes_to_expected_json() {
        let entry = LegendEntry {
            name: "eggs".to_string(),
            color: Hsl::new(200, 75, 45),
            selected: false,
        };
        let json = serde_json::to_string(&entry).expect("serialize entry");
        assert_eq!(
            json,
            r#"{"name":"eggs","color":"hsl(200, 75%, 45%)","selected":false}"#
        );
    }

    #[test]
    fn legend_entry_selected_defaults_to_false() {
        let entry: LegendEntry =
            serde_json::from_str(r#"{"name":"milk","color":"hsl(0, 75%, 45%)"}"#)
                .expect("deserialize entry");
        assert!(!entry.selected);
        assert_eq!(entry.color, Hsl::new(0, 75, 45));
    }
}
