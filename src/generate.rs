use rand::Rng;

use crate::config::GeneratorConfig;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// No field separators and no whitespace.
const SYMBOLS: &str = "!#$%&*+-=?@^_~.,;/()[]{}<>";

/// Random password drawn from letters and digits, plus symbols when enabled.
pub fn password(settings: &GeneratorConfig) -> String {
    let mut alphabet: Vec<char> = LETTERS.chars().chain(DIGITS.chars()).collect();
    if settings.symbols {
        alphabet.extend(SYMBOLS.chars());
    }

    let mut rng = rand::thread_rng();
    (0..settings.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
