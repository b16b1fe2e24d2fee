use crate::color::Hsl;
use crate::color_manager::ColorManager;
use crate::legend::Selection;
use crate::meal::Meal;

#[derive(Clone, Debug, PartialEq)]
pub struct IngredientBar<'a> {
    pub ingredient: &'a str,
    pub color: Hsl,
    pub offset: f64,
    pub width: f64,
}

pub fn ingredient_bars<'a>(
    meal: &'a Meal,
    selection: &Selection,
    colors: &mut ColorManager,
    width: f64,
) -> Vec<IngredientBar<'a>> {
    let relevant: Vec<&str> = meal
        .ingredient_names()
        .filter(|name| selection.highlights(name))
        .collect();

    if relevant.is_empty() {
        return Vec::new();
    }

    let segment = width / relevant.len() as f64;
    relevant
        .into_iter()
        .enumerate()
        .map(|(index, ingredient)| IngredientBar {
            ingredient,
            color: colors.get_color(ingredient),
            offset: segment * index as f64,
            width: segment,
        })
        .collect()
}
