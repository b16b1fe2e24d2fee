use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Time of day as `HH:MM`.
    pub time: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Meal {
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%H:%M").ok()
    }

    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|ingredient| ingredient.name.as_str())
    }

    pub fn uses(&self, ingredient: &str) -> bool {
        self.ingredient_names().any(|name| name == ingredient)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayMeals {
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl DayMeals {
    pub fn meals_by_time(&self) -> Vec<&Meal> {
        let mut meals: Vec<&Meal> = self.meals.iter().collect();
        meals.sort_by_key(|meal| {
            let time = meal.time_of_day();
            (time.is_none(), time)
        });
        meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, time: &str, ingredients: &[&str]) -> Meal {
        Meal {
            id: id.to_string(),
            name: format!("meal {id}"),
            time: time.to_string(),
            ingredients: ingredients
                .iter()
                .map(|name| Ingredient {
                    name: name.to_string(),
                    amount: 1.0,
                    unit: "g".to_string(),
                    category: "other".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn time_of_day_parses_hours_and_minutes() {
        assert_eq!(
            meal("1", "09:00", &[]).time_of_day(),
            NaiveTime::from_hms_opt(9, 0, 0)
        );
        assert_eq!(
            meal("1", "8:30", &[]).time_of_day(),
            NaiveTime::from_hms_opt(8, 30, 0)
        );
        assert_eq!(meal("1", "noon", &[]).time_of_day(), None);
    }

    #[test]
    fn meals_by_time_sorts_chronologically_with_unparsed_last() {
        let day = DayMeals {
            date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            meals: vec![
                meal("late", "19:00", &[]),
                meal("odd", "whenever", &[]),
                meal("early", "08:30", &[]),
                meal("mid", "13:00", &[]),
            ],
        };

        let order: Vec<&str> = day
            .meals_by_time()
            .into_iter()
            .map(|meal| meal.id.as_str())
            .collect();
        assert_eq!(order, vec!["early", "mid", "late", "odd"]);
    }

    #[test]
    fn uses_matches_exact_names() {
        let breakfast = meal("1", "09:00", &["eggs", "milk"]);
        assert!(breakfast.uses("eggs"));
        assert!(!breakfast.uses("Eggs"));
        assert!(!breakfast.uses("egg"));
    }

    #[test]
    fn day_deserializes_from_calendar_json() {
        let json = r#"{
            "date": "2024-03-18",
            "meals": [{
                "id": "1",
                "name": "Breakfast",
                "time": "09:00",
                "ingredients": [
                    {"name": "eggs", "amount": 2, "unit": "pieces", "category": "protein"}
                ]
            }]
        }"#;

        let day: DayMeals = serde_json::from_str(json).expect("parse day");
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(day.meals[0].ingredients[0].amount, 2.0);
        assert_eq!(day.meals[0].ingredient_names().collect::<Vec<_>>(), vec!["eggs"]);
    }
}
