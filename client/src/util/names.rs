//! Random test-player names drawn from an adjective × noun cross product.

#[cfg(test)]
#[path = "names_test.rs"]
mod names_test;

use rand::Rng;
use rand::seq::IndexedRandom;

pub const ADJECTIVES: &[&str] = &[
    "Swift", "Brave", "Clever", "Mighty", "Silent", "Lucky", "Fierce", "Gentle", "Rapid", "Bold", "Sly", "Noble",
    "Wild", "Calm", "Bright", "Shadow", "Golden", "Iron", "Crimson", "Frosty",
];

pub const NOUNS: &[&str] = &[
    "Falcon", "Tiger", "Panda", "Wolf", "Otter", "Dragon", "Phoenix", "Badger", "Lynx", "Raven", "Cobra", "Bison",
    "Heron", "Fox", "Shark", "Mantis", "Yak", "Gecko", "Moose", "Koala",
];

/// Sample one name. Independent draws may repeat; the service rejects duplicates.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Mystery");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Player");
    format!("{adjective} {noun}")
}

/// Sample `count` independent names.
pub fn random_names<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| random_name(rng)).collect()
}
