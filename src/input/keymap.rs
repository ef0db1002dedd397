use std::collections::HashMap;

/// Punctuation by key name, no modifier.
pub const BASE_KEYS: &[(&str, char)] = &[
    ("period", '.'),
    ("comma", ','),
    ("semicolon", ';'),
    ("colon", ':'),
    ("apostrophe", '\''),
    ("quotedbl", '"'),
    ("question", '?'),
    ("exclam", '!'),
    ("hyphen", '-'),
    ("underscore", '_'),
    ("plus", '+'),
    ("equal", '='),
    ("slash", '/'),
    ("backslash", '\\'),
    ("parenleft", '('),
    ("parenright", ')'),
    ("bracketleft", '['),
    ("bracketright", ']'),
    ("braceleft", '{'),
    ("braceright", '}'),
    ("at", '@'),
    ("numbersign", '#'),
    ("dollar", '$'),
    ("percent", '%'),
    ("ampersand", '&'),
    ("asterisk", '*'),
];

/// Shift layer of a German layout.
pub const GERMAN_SHIFT_KEYS: &[(&str, char)] = &[
    ("period", ':'),
    ("comma", ';'),
    ("hyphen", '_'),
    ("plus", '*'),
    ("equal", '+'),
    ("slash", '&'),
    ("backslash", '?'),
    ("1", '!'),
    ("2", '"'),
    ("3", '§'),
    ("4", '$'),
    ("5", '%'),
    ("6", '&'),
    ("7", '/'),
    ("8", '('),
    ("9", ')'),
    ("0", '='),
];

/// Key name + shift state -> inserted character.
///
/// Pure data: swapping layouts means passing other tables to [`KeyMap::new`].
/// Resolution order is shift table, base table, letters (case from shift),
/// then any other single printable character as-is.
#[derive(Debug, Clone)]
pub struct KeyMap {
    base: HashMap<&'static str, char>,
    shifted: HashMap<&'static str, char>,
}

impl KeyMap {
    pub fn new(base: &[(&'static str, char)], shifted: &[(&'static str, char)]) -> Self {
        Self {
            base: base.iter().copied().collect(),
            shifted: shifted.iter().copied().collect(),
        }
    }

    pub fn german() -> Self {
        Self::new(BASE_KEYS, GERMAN_SHIFT_KEYS)
    }

    pub fn resolve(&self, name: &str, shift: bool) -> Option<char> {
        if shift {
            if let Some(&c) = self.shifted.get(name) {
                return Some(c);
            }
        }
        if let Some(&c) = self.base.get(name) {
            return Some(c);
        }

        let mut chars = name.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return None,
        };

        if c.is_alphabetic() {
            return Some(if shift { upper(c) } else { lower(c) });
        }
        if c.is_control() {
            return None;
        }
        Some(c)
    }

    /// Key name for an already-typed character, inverse of the base table.
    pub fn name_of(&self, c: char) -> Option<&'static str> {
        self.base
            .iter()
            .find(|(_, mapped)| **mapped == c)
            .map(|(name, _)| *name)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::german()
    }
}

// Single-char case mapping only; 'ß' has no single uppercase form and stays as is.
fn upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

fn lower(c: char) -> char {
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
