use std::collections::HashMap;

/// Build a letter -> occurrence count table for a string.
/// Non-alphabetic characters are ignored; letters are uppercased.
pub fn letter_counts(letters: &str) -> HashMap<char, usize> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for ch in letters.to_uppercase().chars() {
        if ch.is_ascii_alphabetic() {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }
    counts
}

/// Check whether a word can be spelled from a prepared count table,
/// consuming one count per letter used. Aborts at the first letter
/// that is missing or already depleted.
pub fn can_form_counted(word: &str, counts: &mut HashMap<char, usize>) -> bool {
    for ch in word.to_uppercase().chars() {
        match counts.get_mut(&ch) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    true
}

/// Check if a word can be formed using only the available letters,
/// respecting repeated-letter counts.
pub fn can_form(word: &str, letters: &str) -> bool {
    let mut counts = letter_counts(letters);
    can_form_counted(word, &mut counts)
}
