//! Flesch reading ease

use super::tokenize::{sentence_count, words};

/// Flesch reading ease: `206.835 - 1.015 * words/sentences - 84.6 * syllables/words`.
///
/// Higher is easier. Text without words scores 0.0.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let (word_total, syllable_total) = words(text).fold((0usize, 0usize), |(w, s), word| {
        (w + 1, s + count_syllables(word))
    });
    if word_total == 0 {
        return 0.0;
    }
    let sentences = sentence_count(text).max(1) as f64;
    let words = word_total as f64;

    206.835 - 1.015 * (words / sentences) - 84.6 * (syllable_total as f64 / words)
}

/// Vowel-group syllable estimate, at least one per word
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    // Silent trailing "e" ("make"), but not "-le" ("table")
    let n = letters.len();
    if count > 1 && letters[n - 1] == 'e' && !(n >= 2 && letters[n - 2] == 'l') {
        count -= 1;
    }

    count.max(1)
}
