//! DOMTokenList (classList)
//!
//! Ordered token set backing an element's class attribute. The list owns
//! the attribute value, so it stays live: mutating the list rewrites the
//! attribute, and setting the attribute re-parses the list.

use crate::{ClassListError, ClassListResult};

/// DOMTokenList for managing space-separated tokens (e.g., classList)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    /// Raw attribute value, `None` while the attribute is absent
    value: Option<String>,
    /// Parsed ordered set
    tokens: Vec<String>,
}

impl DOMTokenList {
    /// Create empty token list with no backing attribute
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        list.set_value(s);
        list
    }

    /// Get number of tokens
    pub fn length(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|s| s.as_str())
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add token(s)
    ///
    /// Every token is validated before any is added.
    pub fn add(&mut self, tokens: &[&str]) -> ClassListResult<()> {
        validate_all(tokens)?;

        let before = self.tokens.len();
        for token in tokens {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }

        if self.tokens.len() != before {
            self.run_update_steps();
        }
        Ok(())
    }

    /// Remove token(s), including every duplicate in the attribute
    pub fn remove(&mut self, tokens: &[&str]) -> ClassListResult<()> {
        validate_all(tokens)?;

        let before = self.tokens.len();
        self.tokens.retain(|t| !tokens.contains(&t.as_str()));

        if self.tokens.len() != before {
            self.run_update_steps();
        }
        Ok(())
    }

    /// Toggle token, returns new state
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> ClassListResult<bool> {
        validate(token)?;

        if self.contains(token) {
            if force == Some(true) {
                return Ok(true);
            }
            self.tokens.retain(|t| t != token);
            self.run_update_steps();
            Ok(false)
        } else {
            if force == Some(false) {
                return Ok(false);
            }
            self.tokens.push(token.to_string());
            self.run_update_steps();
            Ok(true)
        }
    }

    /// Replace token in place, returns false if `old_token` is absent
    pub fn replace(&mut self, old_token: &str, new_token: &str) -> ClassListResult<bool> {
        if old_token.is_empty() || new_token.is_empty() {
            return Err(ClassListError::Syntax);
        }
        validate(old_token)?;
        validate(new_token)?;

        let Some(pos) = self.tokens.iter().position(|t| t == old_token) else {
            return Ok(false);
        };

        if old_token == new_token {
            return Ok(true);
        }

        if self.contains(new_token) {
            self.tokens.remove(pos);
        } else {
            self.tokens[pos] = new_token.to_string();
        }
        self.run_update_steps();
        Ok(true)
    }

    /// Get value as string (empty when the attribute is absent)
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Get the backing attribute, if present
    pub fn attribute(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Set from string, kept verbatim until the next mutation
    pub fn set_value(&mut self, value: &str) {
        self.tokens = parse_ordered_set(value);
        self.value = Some(value.to_string());
    }

    /// Drop the backing attribute
    pub fn clear_value(&mut self) {
        self.value = None;
        self.tokens.clear();
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// Serialize the set back into the attribute
    fn run_update_steps(&mut self) {
        if self.value.is_none() && self.tokens.is_empty() {
            return;
        }
        self.value = Some(self.tokens.join(" "));
    }
}

impl std::fmt::Display for DOMTokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Split on ASCII whitespace, keeping the first occurrence of each token
fn parse_ordered_set(s: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in s.split(|c: char| c.is_ascii_whitespace()) {
        if !token.is_empty() && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

fn validate(token: &str) -> ClassListResult<()> {
    if token.is_empty() {
        return Err(ClassListError::Syntax);
    }
    if token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(ClassListError::InvalidCharacter(token.to_string()));
    }
    Ok(())
}

fn validate_all(tokens: &[&str]) -> ClassListResult<()> {
    tokens.iter().try_for_each(|token| validate(token))
}
