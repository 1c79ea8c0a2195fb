// Constants

// Exact arithmetic
pub const TRANSLATION_DENOMINATOR: i32 = 24; // Translations are stored as integer 24ths
pub const ORIGIN_SHIFT_DENOMINATOR: i32 = 12; // Hall origin shifts are written in twelfths

// Crystallographic bounds
pub const MAX_FOLD: u32 = 6; // Crystallographic restriction theorem
pub const MAX_GROUP_ORDER: usize = 200; // Closure guard, largest space group has 192 operations
pub const MAX_HALL_GENERATORS: usize = 4; // Generator clauses allowed after the lattice symbol

// Tolerances
pub const FRACTION_TOLERANCE: f64 = 1e-6; // For decimal constants converted to 24ths
