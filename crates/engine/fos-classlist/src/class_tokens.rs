//! Class Token Helpers
//!
//! get, set, has, add, remove, enable, swap, toggle and add_remove over an
//! element's class tokens. [`NativeTokenList`] delegates to the element's
//! DOMTokenList; [`AttributeParsing`] splits and rewrites the class
//! attribute itself. [`ClassTokens`] dispatches to whichever one the
//! process resolved.

use crate::config::{self, Strategy};
use crate::{ClassElement, ClassListError, ClassListResult, DOMTokenList};

// ============================================================================
// Token sequence
// ============================================================================

/// Class tokens of an element
#[derive(Debug, Clone)]
pub enum Tokens<'a> {
    /// The element's live DOMTokenList
    Live(&'a DOMTokenList),
    /// Tokens parsed from the class attribute, duplicates included
    Parsed(Vec<&'a str>),
}

impl<'a> Tokens<'a> {
    /// Number of tokens
    pub fn len(&self) -> usize {
        match self {
            Tokens::Live(list) => list.length(),
            Tokens::Parsed(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if token is present
    pub fn contains(&self, token: &str) -> bool {
        match self {
            Tokens::Live(list) => list.contains(token),
            Tokens::Parsed(tokens) => tokens.contains(&token),
        }
    }

    /// Iterate over tokens in order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        let (live, parsed) = match self {
            Tokens::Live(list) => {
                let list: &'a DOMTokenList = *list;
                (Some(list.iter()), None)
            }
            Tokens::Parsed(tokens) => (None, Some(tokens.iter().copied())),
        };
        live.into_iter().flatten().chain(parsed.into_iter().flatten())
    }

    /// Detached copy of the tokens
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

// ============================================================================
// Strategy trait
// ============================================================================

/// Class token operations
///
/// Implementors provide the primitives; the combined operations are built
/// on top of them.
pub trait ClassTokenOps {
    /// Current class tokens
    fn tokens<'e, E: ClassElement>(&self, element: &'e E) -> ClassListResult<Tokens<'e>>;

    /// Check if `token` is one of the element's classes
    fn contains<E: ClassElement>(&self, element: &E, token: &str) -> ClassListResult<bool>;

    /// Add `token` unless already present
    fn add<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()>;

    /// Remove every occurrence of `token`
    fn remove<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()>;

    /// Add each absent token
    fn add_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()>;

    /// Remove every occurrence of each token
    fn remove_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()>;

    /// Overwrite the class attribute verbatim
    fn set<E: ClassElement>(&self, element: &mut E, value: &str) {
        element.set_class_name(value);
    }

    /// Add or remove `token`
    fn enable<E: ClassElement>(&self, element: &mut E, token: &str, enabled: bool) -> ClassListResult<()> {
        if enabled {
            self.add(element, token)
        } else {
            self.remove(element, token)
        }
    }

    /// Add or remove all `tokens`
    fn enable_all<E: ClassElement>(
        &self,
        element: &mut E,
        tokens: &[&str],
        enabled: bool,
    ) -> ClassListResult<()> {
        if enabled {
            self.add_all(element, tokens)
        } else {
            self.remove_all(element, tokens)
        }
    }

    /// Replace `from` with `to` only if `from` is present
    ///
    /// Returns false, without touching the element, when `from` is absent.
    fn swap<E: ClassElement>(&self, element: &mut E, from: &str, to: &str) -> ClassListResult<bool> {
        if !self.contains(element, from)? {
            return Ok(false);
        }
        self.remove(element, from)?;
        self.add(element, to)?;
        Ok(true)
    }

    /// Flip presence of `token`, returns whether it is now present
    fn toggle<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<bool> {
        let add = !self.contains(element, token)?;
        self.enable(element, token, add)?;
        Ok(add)
    }

    /// Remove `to_remove` then add `to_add`, whether or not either was present
    fn add_remove<E: ClassElement>(
        &self,
        element: &mut E,
        to_remove: &str,
        to_add: &str,
    ) -> ClassListResult<()> {
        self.remove(element, to_remove)?;
        self.add(element, to_add)
    }
}

// ============================================================================
// Native strategy
// ============================================================================

/// Delegates to the element's DOMTokenList
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTokenList;

fn native_list<E: ClassElement>(element: &E) -> ClassListResult<&DOMTokenList> {
    element.token_list().ok_or(ClassListError::MissingTokenList)
}

fn native_list_mut<E: ClassElement>(element: &mut E) -> ClassListResult<&mut DOMTokenList> {
    element.token_list_mut().ok_or(ClassListError::MissingTokenList)
}

impl ClassTokenOps for NativeTokenList {
    fn tokens<'e, E: ClassElement>(&self, element: &'e E) -> ClassListResult<Tokens<'e>> {
        native_list(element).map(Tokens::Live)
    }

    fn contains<E: ClassElement>(&self, element: &E, token: &str) -> ClassListResult<bool> {
        Ok(native_list(element)?.contains(token))
    }

    fn add<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        native_list_mut(element)?.add(&[token])
    }

    fn remove<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        native_list_mut(element)?.remove(&[token])
    }

    fn add_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        native_list_mut(element)?.add(tokens)
    }

    fn remove_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        native_list_mut(element)?.remove(tokens)
    }
}

// ============================================================================
// Attribute parsing strategy
// ============================================================================

/// Splits and rewrites the class attribute string
///
/// Never fails. Tokens are not validated: an empty or whitespace-bearing
/// token is spliced into the attribute as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeParsing;

/// Split a class name on whitespace; a non-string class name has no tokens
fn parse_class_name(class_name: Option<&str>) -> Vec<&str> {
    class_name.unwrap_or("").split_whitespace().collect()
}

fn write_class_name<E: ClassElement>(element: &mut E, value: &str) {
    tracing::trace!("class attribute rewritten: {:?}", value);
    element.set_class_name(value);
}

impl ClassTokenOps for AttributeParsing {
    fn tokens<'e, E: ClassElement>(&self, element: &'e E) -> ClassListResult<Tokens<'e>> {
        Ok(Tokens::Parsed(parse_class_name(element.class_name())))
    }

    fn contains<E: ClassElement>(&self, element: &E, token: &str) -> ClassListResult<bool> {
        Ok(parse_class_name(element.class_name()).contains(&token))
    }

    fn add<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        if self.contains(element, token)? {
            return Ok(());
        }

        let value = match element.class_name() {
            Some(current) if !current.is_empty() => format!("{} {}", current, token),
            _ => token.to_string(),
        };
        write_class_name(element, &value);
        Ok(())
    }

    fn remove<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        if !self.contains(element, token)? {
            return Ok(());
        }

        let value = parse_class_name(element.class_name())
            .into_iter()
            .filter(|t| *t != token)
            .collect::<Vec<_>>()
            .join(" ");
        write_class_name(element, &value);
        Ok(())
    }

    fn add_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        let mut current: Vec<String> = parse_class_name(element.class_name())
            .into_iter()
            .map(str::to_string)
            .collect();

        let before = current.len();
        for token in tokens {
            if !current.iter().any(|t| t == token) {
                current.push(token.to_string());
            }
        }

        if current.len() != before {
            write_class_name(element, &current.join(" "));
        }
        Ok(())
    }

    fn remove_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        let value = {
            let current = parse_class_name(element.class_name());
            let kept: Vec<&str> = current.iter().copied().filter(|t| !tokens.contains(t)).collect();
            (kept.len() != current.len()).then(|| kept.join(" "))
        };

        if let Some(value) = value {
            write_class_name(element, &value);
        }
        Ok(())
    }
}

// ============================================================================
// Accessor
// ============================================================================

/// Class token accessor bound to one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTokens {
    strategy: Strategy,
}

impl ClassTokens {
    /// Accessor using an explicit strategy
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Accessor using the process-wide strategy
    pub fn global() -> Self {
        Self::with_strategy(config::strategy())
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Default for ClassTokens {
    fn default() -> Self {
        Self::global()
    }
}

impl ClassTokenOps for ClassTokens {
    fn tokens<'e, E: ClassElement>(&self, element: &'e E) -> ClassListResult<Tokens<'e>> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.tokens(element),
            Strategy::AttributeParsing => AttributeParsing.tokens(element),
        }
    }

    fn contains<E: ClassElement>(&self, element: &E, token: &str) -> ClassListResult<bool> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.contains(element, token),
            Strategy::AttributeParsing => AttributeParsing.contains(element, token),
        }
    }

    fn add<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.add(element, token),
            Strategy::AttributeParsing => AttributeParsing.add(element, token),
        }
    }

    fn remove<E: ClassElement>(&self, element: &mut E, token: &str) -> ClassListResult<()> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.remove(element, token),
            Strategy::AttributeParsing => AttributeParsing.remove(element, token),
        }
    }

    fn add_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.add_all(element, tokens),
            Strategy::AttributeParsing => AttributeParsing.add_all(element, tokens),
        }
    }

    fn remove_all<E: ClassElement>(&self, element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
        match self.strategy {
            Strategy::NativeTokenList => NativeTokenList.remove_all(element, tokens),
            Strategy::AttributeParsing => AttributeParsing.remove_all(element, tokens),
        }
    }
}

// ============================================================================
// Process-wide helpers
// ============================================================================

/// Get the element's class tokens
pub fn get<E: ClassElement>(element: &E) -> ClassListResult<Tokens<'_>> {
    ClassTokens::global().tokens(element)
}

/// Overwrite the class attribute verbatim
pub fn set<E: ClassElement>(element: &mut E, value: &str) {
    ClassTokens::global().set(element, value)
}

/// Check if the element has `token`
pub fn has<E: ClassElement>(element: &E, token: &str) -> ClassListResult<bool> {
    ClassTokens::global().contains(element, token)
}

/// Add `token` unless already present
pub fn add<E: ClassElement>(element: &mut E, token: &str) -> ClassListResult<()> {
    ClassTokens::global().add(element, token)
}

/// Add each absent token
pub fn add_all<E: ClassElement>(element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
    ClassTokens::global().add_all(element, tokens)
}

/// Remove every occurrence of `token`
pub fn remove<E: ClassElement>(element: &mut E, token: &str) -> ClassListResult<()> {
    ClassTokens::global().remove(element, token)
}

/// Remove every occurrence of each token
pub fn remove_all<E: ClassElement>(element: &mut E, tokens: &[&str]) -> ClassListResult<()> {
    ClassTokens::global().remove_all(element, tokens)
}

/// Add `token` if `enabled`, remove it otherwise
pub fn enable<E: ClassElement>(element: &mut E, token: &str, enabled: bool) -> ClassListResult<()> {
    ClassTokens::global().enable(element, token, enabled)
}

/// Add all `tokens` if `enabled`, remove them otherwise
pub fn enable_all<E: ClassElement>(
    element: &mut E,
    tokens: &[&str],
    enabled: bool,
) -> ClassListResult<()> {
    ClassTokens::global().enable_all(element, tokens, enabled)
}

/// Replace `from` with `to` if `from` is present
pub fn swap<E: ClassElement>(element: &mut E, from: &str, to: &str) -> ClassListResult<bool> {
    ClassTokens::global().swap(element, from, to)
}

/// Flip presence of `token`, returns whether it is now present
pub fn toggle<E: ClassElement>(element: &mut E, token: &str) -> ClassListResult<bool> {
    ClassTokens::global().toggle(element, token)
}

/// Remove `to_remove` and add `to_add` unconditionally
pub fn add_remove<E: ClassElement>(element: &mut E, to_remove: &str, to_add: &str) -> ClassListResult<()> {
    ClassTokens::global().add_remove(element, to_remove, to_add)
}
