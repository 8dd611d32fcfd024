//! Identifier casing used for sample paths.

/// An identifier broken into lowercase words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    words: Vec<String>,
}

impl Name {
    /// Split on `_`, `-`, `.`, whitespace, and lower-to-upper case boundaries.
    pub fn from(identifier: &str) -> Self {
        let mut words = Vec::new();
        let mut current = String::new();
        let mut prev_lower = false;

        for ch in identifier.chars() {
            if ch == '_' || ch == '-' || ch == '.' || ch.is_whitespace() {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                prev_lower = false;
                continue;
            }
            if ch.is_uppercase() && prev_lower && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            current.extend(ch.to_lowercase());
        }
        if !current.is_empty() {
            words.push(current);
        }

        Self { words }
    }

    pub fn to_upper_camel(&self) -> String {
        self.words.iter().map(|w| capitalize(w)).collect()
    }

    pub fn to_lower_underscore(&self) -> String {
        self.words.join("_")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
