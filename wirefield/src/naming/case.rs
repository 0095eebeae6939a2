//! Word splitting for camelCase identifiers
//!
//! A word boundary sits where
//! - a lowercase letter or digit is followed by an uppercase letter (`userDesc`), or
//! - an uppercase run ends in a capital that starts a lowercase word (`HTTPServer`).
//!
//! Capitals inside a run are never split from each other, so acronyms stay whole.
//! Underscores, dashes and other punctuation are ordinary characters and never act
//! as boundaries.

/// Split a declared field name into its camelCase words
///
/// Returns slices of `name`; an empty name yields no words.
#[must_use]
pub fn split_words(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for (i, &(offset, current)) in chars.iter().enumerate().skip(1) {
        if !current.is_uppercase() {
            continue;
        }
        let previous = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let after_lower = previous.is_lowercase() || previous.is_numeric();
        let acronym_end = previous.is_uppercase() && next.is_some_and(char::is_lowercase);

        if after_lower || acronym_end {
            words.push(&name[start..offset]);
            start = offset;
        }
    }

    if start < name.len() {
        words.push(&name[start..]);
    }
    words
}

/// Lower-case every word and join with `separator`
#[must_use]
pub fn lower_joined(name: &str, separator: char) -> String {
    join_mapped(name, separator, str::to_lowercase)
}

/// Upper-case every word and join with `separator`
#[must_use]
pub fn upper_joined(name: &str, separator: char) -> String {
    join_mapped(name, separator, str::to_uppercase)
}

/// Keep each word's case and join with `separator`
#[must_use]
pub fn joined(name: &str, separator: char) -> String {
    join_mapped(name, separator, str::to_string)
}

fn join_mapped(name: &str, separator: char, map: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, word) in split_words(name).into_iter().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(&map(word));
    }
    out
}

/// Upper-case the first letter, leaving any leading non-letters in place
///
/// `someField` becomes `SomeField`, `_someField` becomes `_SomeField`.
#[must_use]
pub fn upper_first_letter(name: &str) -> String {
    let Some((offset, first)) = name.char_indices().find(|(_, c)| c.is_alphabetic()) else {
        return name.to_string();
    };
    if first.is_uppercase() {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len());
    out.push_str(&name[..offset]);
    out.extend(first.to_uppercase());
    out.push_str(&name[offset + first.len_utf8()..]);
    out
}
