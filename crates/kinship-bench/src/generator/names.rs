//! Name pools for generated people.

use rand::Rng;
use rand::rngs::StdRng;

const GIVEN_NAMES: &[&str] = &[
    "Ada", "Basilia", "Cyrus", "Dolores", "Emil", "Farah", "Gustavo", "Hedda", "Ines", "Jonas",
    "Kalani", "Lucia", "Mateo", "Nadia", "Oskar", "Paloma", "Quentin", "Rosa", "Silas", "Tomasa",
    "Ulla", "Vito", "Wren", "Yara",
];

const SURNAMES: &[&str] = &[
    "Abara", "Berg", "Castillo", "Dahl", "Esposito", "Fonseca", "Grady", "Hart", "Ibarra",
    "Jensen", "Kowal", "Lindqvist", "Moreau", "Novak", "Ortega", "Pike",
];

/// Picks a given name.
pub fn given_name(rng: &mut StdRng) -> &'static str {
    GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())]
}

/// Picks a surname.
pub fn surname(rng: &mut StdRng) -> &'static str {
    SURNAMES[rng.gen_range(0..SURNAMES.len())]
}
