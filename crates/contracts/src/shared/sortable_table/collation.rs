//! Сравнение строк с учётом локали (приближение к `localeCompare(b, ['ru', 'en'])`).
//!
//! Три уровня, как в ICU:
//! 1. первичный: класс символа (пробелы и знаки < цифры < кириллица < латиница < прочее),
//!    затем буква без учёта регистра, `ё` приравнена к `е`;
//! 2. вторичный: `е` < `ё`;
//! 3. третичный: строчная перед заглавной.
//!
//! Если строки равны на всех уровнях, порядок определяется кодами символов.

use std::cmp::Ordering;

fn is_cyrillic(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{052F}')
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\u{00C0}'..='\u{024F}')
}

fn char_class(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if !c.is_alphabetic() {
        0
    } else if is_cyrillic(c) {
        2
    } else if is_latin(c) {
        3
    } else {
        4
    }
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn fold(c: char) -> char {
    match lower(c) {
        'ё' => 'е',
        other => other,
    }
}

fn primary_key(c: char) -> (u8, char) {
    (char_class(c), fold(c))
}

fn compare_level<K: Ord>(a: &str, b: &str, key: impl Fn(char) -> K) -> Ordering {
    a.chars().map(&key).cmp(b.chars().map(&key))
}

/// Сравнивает две строки по правилам коллации
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    compare_level(a, b, primary_key)
        .then_with(|| compare_level(a, b, |c| lower(c) == 'ё'))
        .then_with(|| compare_level(a, b, |c| c.is_uppercase()))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Ann", "ann"), Ordering::Greater);
    }

    #[test]
    fn test_cyrillic_before_latin() {
        assert_eq!(locale_compare("Яблоко", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("абв", "где"), Ordering::Less);
    }

    #[test]
    fn test_yo_sorts_with_ye() {
        assert_eq!(locale_compare("ёж", "жук"), Ordering::Less);
        assert_eq!(locale_compare("елка", "ёлка"), Ordering::Less);
        assert_eq!(locale_compare("ёлка", "ель"), Ordering::Less);
        assert_eq!(locale_compare("ее", "её"), Ordering::Less);
    }

    #[test]
    fn test_digits_and_punctuation_first() {
        assert_eq!(locale_compare("1abc", "abc"), Ordering::Less);
        assert_eq!(locale_compare(" x", "1"), Ordering::Less);
        assert_eq!(locale_compare("10", "9"), Ordering::Less);
    }

    #[test]
    fn test_prefix_is_smaller() {
        assert_eq!(locale_compare("Bob", "Bobby"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }
}
