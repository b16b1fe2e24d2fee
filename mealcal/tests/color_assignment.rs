use std::collections::{HashMap, HashSet};

use mealcal::color::distance;
use mealcal::palette::{self, BASE_PALETTE};
use mealcal::{ColorManager, Hsl, WeekPlan};
use proptest::collection::vec;
use proptest::prelude::*;

const SAMPLE_WEEK: &str = include_str!("fixtures/sample_week.json");

fn arb_color() -> impl Strategy<Value = Hsl> {
    (0u16..360, 0u8..=100, 0u8..=100).prop_map(|(h, s, l)| Hsl::new(h, s, l))
}

fn arb_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    vec("[a-z]{1,6}", 0..max)
}

fn expected_pick(palette: &[Hsl], used: &[Hsl]) -> Hsl {
    let mut best: Option<(Hsl, f64)> = None;
    for &candidate in palette {
        if used.contains(&candidate) {
            continue;
        }
        let score = used
            .iter()
            .map(|&color| distance(candidate, color))
            .fold(f64::INFINITY, f64::min);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(color, _)| color).unwrap_or(palette[0])
}

#[test]
fn sample_week_assigns_expected_colors() {
    let plan: WeekPlan = serde_json::from_str(SAMPLE_WEEK).expect("parse sample week");
    let manager = plan.color_manager();

    assert_eq!(manager.palette().len(), 13);

    let hsl = |hue, lightness| Hsl::new(hue, 75, lightness);
    let expected = [
        ("eggs", hsl(200, 45)),
        ("milk", hsl(0, 45)),
        ("bread", hsl(120, 45)),
        ("spinach", hsl(280, 45)),
        ("chicken breast", hsl(40, 45)),
        ("rice", hsl(240, 45)),
        ("olive oil", hsl(160, 45)),
        ("salmon", hsl(320, 45)),
        ("broccoli", hsl(80, 45)),
        ("oatmeal", hsl(0, 60)),
        ("banana", hsl(120, 60)),
        ("honey", hsl(200, 60)),
        ("lettuce", hsl(20, 45)),
    ];
    for (name, color) in expected {
        assert_eq!(manager.get(name), Some(color), "color of {name}");
    }

    let distinct: HashSet<Hsl> = manager.assignments().values().copied().collect();
    assert_eq!(distinct.len(), 13);
}

#[test]
fn maximin_on_small_synthetic_palette() {
    let palette = vec![
        Hsl::new(0, 0, 0),
        Hsl::new(0, 0, 100),
        Hsl::new(0, 0, 50),
        Hsl::new(0, 100, 50),
    ];
    let manager =
        ColorManager::with_palette(palette, ["first", "second", "third"]).expect("palette");

    assert_eq!(manager.get("first"), Some(Hsl::new(0, 0, 0)));
    assert_eq!(manager.get("second"), Some(Hsl::new(0, 0, 100)));
    assert_eq!(manager.get("third"), Some(Hsl::new(0, 100, 50)));
}

#[test]
fn generated_palette_is_extended_not_padded() {
    assert_eq!(palette::generate(10), BASE_PALETTE.to_vec());
    let manager = ColorManager::new((0..25).map(|i| format!("ingredient {i}")));
    assert_eq!(manager.palette(), palette::generate(25).as_slice());
}

proptest! {
    #[test]
    fn assignments_follow_maximin_rule(
        palette in vec(arb_color(), 1..6),
        names in arb_names(10),
    ) {
        let mut manager = ColorManager::with_palette(palette.clone(), Vec::<String>::new())
            .expect("non-empty palette");
        let mut used: Vec<Hsl> = Vec::new();
        let mut assigned: HashMap<String, Hsl> = HashMap::new();

        for name in &names {
            let expected = match assigned.get(name) {
                Some(color) => *color,
                None => {
                    let pick = expected_pick(&palette, &used);
                    if !used.contains(&pick) {
                        used.push(pick);
                    }
                    assigned.insert(name.clone(), pick);
                    pick
                }
            };
            prop_assert_eq!(manager.get_color(name), expected);
            prop_assert_eq!(manager.used_count(), used.len());
        }
    }

    #[test]
    fn identical_input_gives_identical_colors(names in arb_names(40)) {
        let first = ColorManager::new(&names);
        let second = ColorManager::new(&names);
        prop_assert_eq!(first.assignments(), second.assignments());
    }

    #[test]
    fn colors_are_unique_up_to_thirty_names(names in arb_names(30)) {
        let manager = ColorManager::new(&names);
        let distinct: HashSet<Hsl> = manager.assignments().values().copied().collect();
        prop_assert_eq!(distinct.len(), manager.len());
    }

    #[test]
    fn distance_is_a_symmetric_non_negative_measure(a in arb_color(), b in arb_color()) {
        prop_assert!(distance(a, b) >= 0.0);
        prop_assert_eq!(distance(a, b), distance(b, a));
        prop_assert_eq!(distance(a, a), 0.0);
    }
}
