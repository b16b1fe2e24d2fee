use crate::bars::{ingredient_bars, IngredientBar};
use crate::color::Hsl;
use crate::color_manager::ColorManager;
use crate::compare::MealComparison;
use crate::legend::{legend_entries, LegendRow, Selection};
use crate::plan::{MealRef, WeekPlan};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("unknown meal: {0}")]
    UnknownMeal(String),
}

#[derive(Clone, Debug)]
pub struct CalendarState {
    plan: WeekPlan,
    colors: ColorManager,
    selection: Selection,
}

impl CalendarState {
    pub fn new(plan: WeekPlan) -> Self {
        let colors = plan.color_manager();
        tracing::debug!(
            days = plan.days().len(),
            meals = plan.meal_count(),
            ingredients = colors.len(),
            "calendar state built"
        );
        Self {
            plan,
            colors,
            selection: Selection::new(),
        }
    }

    pub fn replace_plan(&mut self, plan: WeekPlan) {
        *self = Self::new(plan);
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn colors(&self) -> &ColorManager {
        &self.colors
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn color_of(&mut self, ingredient: &str) -> Hsl {
        self.colors.get_color(ingredient)
    }

    pub fn toggle_ingredient(&mut self, ingredient: &str) -> bool {
        self.selection.toggle(ingredient)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn legend(&self, search: &str) -> Vec<LegendRow<'_>> {
        legend_entries(&self.colors, search, &self.selection)
    }

    pub fn bars_for(
        &mut self,
        meal_id: &str,
        width: f64,
    ) -> Result<Vec<IngredientBar<'_>>, CalendarError> {
        let meal = self
            .plan
            .find_meal(meal_id)
            .ok_or_else(|| CalendarError::UnknownMeal(meal_id.to_string()))?
            .meal;
        Ok(ingredient_bars(meal, &self.selection, &mut self.colors, width))
    }

    pub fn compare(
        &self,
        first_id: &str,
        second_id: &str,
    ) -> Result<MealComparison, CalendarError> {
        let first = self.meal(first_id)?;
        let second = self.meal(second_id)?;
        Ok(MealComparison::new(first.meal, second.meal))
    }

    pub fn highlighted_meals(&self) -> Vec<MealRef<'_>> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.plan
            .meals()
            .filter(|entry| {
                entry
                    .meal
                    .ingredient_names()
                    .any(|name| self.selection.contains(name))
            })
            .collect()
    }

    fn meal(&self, id: &str) -> Result<MealRef<'_>, CalendarError> {
        self.plan
            .find_meal(id)
            .ok_or_else(|| CalendarError::UnknownMeal(id.to_string()))
    }
}

impl Default for CalendarState {
    fn default() -> Self {
        Self::new(WeekPlan::default())
    }
}
