//! Ingredient colors and week-plan model behind the meal calendar.
//!
//! Every ingredient in a [`plan::WeekPlan`] gets a color from a
//! [`color_manager::ColorManager`], which picks each new color to be as far
//! as possible from the ones already in use. [`calendar::CalendarState`] ties
//! the plan, its colors and the legend selection together.

pub mod api;
pub mod bars;
pub mod calendar;
pub mod color;
pub mod color_manager;
pub mod compare;
pub mod legend;
pub mod meal;
pub mod palette;
pub mod plan;

pub use calendar::CalendarState;
pub use color::Hsl;
pub use color_manager::ColorManager;
pub use plan::WeekPlan;
