//! Roman-numeral codec for enchantment levels.
//!
//! Levels are persisted in descriptive text as Roman numerals so they read
//! naturally next to the host's own enchantment lines. Zero is a legal level
//! (the hidden-marker state) and gets a dedicated sentinel rather than the
//! empty string, so a written level is always recoverable.

/// Sentinel emitted for level zero. Decodes back to 0.
pub const ZERO: char = 'O';

/// Characters [`decode`] accepts; everything else is discarded before the scan.
const ALPHABET: &str = "MDCLXVIO";

/// Subtractive-pair table in descending value order.
const SYMBOLS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Encodes a level as Roman numerals, with no upper bound.
pub fn encode(level: u32) -> String {
    if level == 0 {
        return ZERO.to_string();
    }

    let mut remaining = level;
    let mut out = String::new();
    for (value, symbol) in SYMBOLS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

/// Decodes Roman numerals back to a level.
///
/// Input is uppercased and every character outside the symbol alphabet is
/// dropped before scanning; `None` means nothing decodable was left. The scan
/// applies the standard subtractive rule: a symbol smaller than its successor
/// contributes the difference and consumes both positions. The zero sentinel
/// contributes nothing, so `"O"` decodes to 0.
pub fn decode(text: &str) -> Option<u32> {
    let symbols: Vec<char> = text
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| ALPHABET.contains(*c))
        .collect();
    if symbols.is_empty() {
        return None;
    }

    let mut total = 0u32;
    let mut i = 0;
    while i < symbols.len() {
        let one = value(symbols[i]);
        if one == 0 {
            i += 1;
            continue;
        }
        match symbols.get(i + 1).map(|c| value(*c)) {
            // A sentinel after this symbol consumes both positions.
            Some(0) => i += 2,
            Some(two) if one < two => {
                total += two - one;
                i += 2;
            }
            _ => {
                total += one;
                i += 1;
            }
        }
    }
    Some(total)
}

fn value(symbol: char) -> u32 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}
