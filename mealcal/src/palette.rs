use crate::color::Hsl;

pub const BASE_PALETTE: [Hsl; 10] = [
    Hsl::new(200, 75, 45), // blue
    Hsl::new(0, 75, 45),   // red
    Hsl::new(120, 75, 45), // green
    Hsl::new(280, 75, 45), // purple
    Hsl::new(40, 75, 45),  // orange
    Hsl::new(160, 75, 45), // teal
    Hsl::new(320, 75, 45), // pink
    Hsl::new(80, 75, 45),  // lime
    Hsl::new(240, 75, 45), // indigo
    Hsl::new(20, 75, 45),  // red-orange
];

pub const LIGHTNESS_LEVELS: [u8; 3] = [45, 60, 75];

/// Returns the `index`-th entry of the extended palette sequence.
///
/// Each full pass over [`BASE_PALETTE`] moves to the next entry of
/// [`LIGHTNESS_LEVELS`], so the sequence repeats every 30 entries.
#[inline]
pub fn color_for(index: usize) -> Hsl {
    let base = BASE_PALETTE[index % BASE_PALETTE.len()];
    let pass = index / BASE_PALETTE.len();
    base.with_lightness(LIGHTNESS_LEVELS[pass % LIGHTNESS_LEVELS.len()])
}

pub fn generate(count: usize) -> Vec<Hsl> {
    if count <= BASE_PALETTE.len() {
        return BASE_PALETTE[..count].to_vec();
    }

    (0..count).map(color_for).collect()
}
