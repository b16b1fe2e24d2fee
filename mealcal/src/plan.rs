use std::collections::HashSet;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::color_manager::ColorManager;
use crate::meal::{DayMeals, Meal};

pub const PLAN_PATH_ENV: &str = "MEALCAL_PLAN_PATH";

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("config directory unavailable")]
    MissingConfigDir,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MealRef<'a> {
    pub day: &'a DayMeals,
    pub meal: &'a Meal,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: Vec<DayMeals>,
}

impl WeekPlan {
    pub fn new(days: Vec<DayMeals>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayMeals] {
        &self.days
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|day| day.meals.len()).sum()
    }

    pub fn meals(&self) -> impl Iterator<Item = MealRef<'_>> {
        self.days
            .iter()
            .flat_map(|day| day.meals.iter().map(move |meal| MealRef { day, meal }))
    }

    pub fn unique_ingredients(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for MealRef { meal, .. } in self.meals() {
            for name in meal.ingredient_names() {
                if seen.insert(name) {
                    names.push(name.to_string());
                }
            }
        }
        names
    }

    pub fn color_manager(&self) -> ColorManager {
        ColorManager::new(self.unique_ingredients())
    }

    pub fn find_meal(&self, id: &str) -> Option<MealRef<'_>> {
        self.meals().find(|entry| entry.meal.id == id)
    }

    pub fn meals_with_ingredient(&self, ingredient: &str) -> Vec<MealRef<'_>> {
        self.meals()
            .filter(|entry| entry.meal.uses(ingredient))
            .collect()
    }

    /// Appends the days of `other`, keeping the days sorted by date. Days
    /// sharing a date keep their arrival order.
    pub fn merge(&mut self, other: WeekPlan) {
        self.days.extend(other.days);
        self.days.sort_by_key(|day| day.date);
    }

    pub fn save(&self) -> Result<(), PlanError> {
        let path = get_plan_path()?;
        self.save_to_path(path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), PlanError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load() -> Result<Self, PlanError> {
        let path = get_plan_path()?;
        Self::load_from_path(path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

impl From<Vec<DayMeals>> for WeekPlan {
    fn from(days: Vec<DayMeals>) -> Self {
        Self::new(days)
    }
}

pub fn get_plan_path() -> Result<PathBuf, PlanError> {
    if let Ok(custom) = env::var(PLAN_PATH_ENV) {
        return Ok(PathBuf::from(custom));
    }
    let base = config_dir().ok_or(PlanError::MissingConfigDir)?;
    Ok(base.join("mealcal").join("plan.json"))
}
