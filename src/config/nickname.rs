//! Fallback nickname generator.
//!
//! Used when no nickname is configured. Produces names in the format
//! `WordWordNN` (e.g. `AmberEel7`), short enough for IRC's typical
//! 9-character nickname limit.

use rand::RngExt;

const FIRST: &[&str] = &[
    "Amber", "Ash", "Bolt", "Brine", "Coal", "Drift", "Dusk", "Ember", "Fen", "Flint", "Gale",
    "Grim", "Husk", "Jade", "Kelp", "Mire", "Moss", "Pale", "Rift", "Rust", "Salt", "Slate",
    "Tide", "Vale",
];

const SECOND: &[&str] = &[
    "Crab", "Eel", "Gull", "Hare", "Kite", "Loon", "Mole", "Pike", "Ray", "Seal", "Skua", "Swan",
    "Tern", "Toad", "Vole", "Wasp", "Wren",
];

/// Generate a random nickname like `AmberEel7`.
pub fn generate_nickname() -> String {
    let mut rng = rand::rng();
    let first = FIRST[rng.random_range(0..FIRST.len())];
    let second = SECOND[rng.random_range(0..SECOND.len())];
    let num: u8 = rng.random_range(0..100);
    format!("{}{}{}", first, second, num)
}
