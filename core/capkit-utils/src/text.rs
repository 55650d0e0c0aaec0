use std::collections::HashMap;
use std::io::{self, Write};

const GREETING: &str = "Hello from Utils!";

#[must_use]
pub fn greeting() -> &'static str {
    GREETING
}

/// Writes the greeting as a single line.
pub fn print_greeting_to(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}

/// True when `text` is absent or contains only whitespace.
#[must_use]
pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.trim().is_empty())
}

/// Counts occurrences of each character.
#[must_use]
pub fn char_frequency(text: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for ch in text.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}
