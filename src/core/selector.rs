// src/core/selector.rs

//! Class-set arguments: an explicit list, or one of the sentinels `all` / `none`.

use crate::models::Vocabulary;
use thiserror::Error;

/// Token that selects the whole vocabulary.
pub const ALL_TOKEN: &str = "all";
/// Token that selects nothing (only where the command allows it).
pub const NONE_TOKEN: &str = "none";

/// Which members of a vocabulary a command applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// The listed members, in input order.
    Explicit(Vec<T>),
    /// The whole vocabulary.
    All,
    /// No member at all.
    None,
}

impl<T: Vocabulary> Selector<T> {
    /// Expands the selector into the concrete class list sent to the server.
    pub fn into_classes(self) -> Vec<T> {
        match self {
            Self::Explicit(classes) => classes,
            Self::All => T::ALL.to_vec(),
            Self::None => Vec::new(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// No argument was given.
    #[error("no classes provided")]
    Empty,
    /// The first argument that is not in the vocabulary.
    #[error("'{0}' is not a known class")]
    Unknown(String),
}

/// Parses class arguments.
///
/// A single `all` (or `none`, when `allow_none` is set) selects the whole or
/// empty vocabulary. Anything else is validated item by item and the first
/// unknown name rejects the whole list. Sentinels mixed with names are
/// treated as ordinary (invalid) names.
pub fn parse_selector<T: Vocabulary>(
    args: &[String],
    allow_none: bool,
) -> Result<Selector<T>, SelectorError> {
    match args {
        [] => Err(SelectorError::Empty),
        [single] if single == ALL_TOKEN => Ok(Selector::All),
        [single] if allow_none && single == NONE_TOKEN => Ok(Selector::None),
        names => names
            .iter()
            .map(|name| T::parse(name).ok_or_else(|| SelectorError::Unknown(name.clone())))
            .collect::<Result<Vec<_>, _>>()
            .map(Selector::Explicit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiClass, DinoClass};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_expands_to_full_vocabulary() {
        let selector = parse_selector::<DinoClass>(&args(&["all"]), false).unwrap();
        assert_eq!(selector, Selector::All);
        assert_eq!(selector.into_classes(), DinoClass::ALL.to_vec());
    }

    #[test]
    fn test_none_only_when_allowed() {
        let selector = parse_selector::<AiClass>(&args(&["none"]), true).unwrap();
        assert!(selector.into_classes().is_empty());

        assert_eq!(
            parse_selector::<DinoClass>(&args(&["none"]), false),
            Err(SelectorError::Unknown("none".to_string()))
        );
    }

    #[test]
    fn test_explicit_list_keeps_order() {
        let selector =
            parse_selector::<DinoClass>(&args(&["Troodon", "Stegosaurus"]), false).unwrap();
        assert_eq!(
            selector.into_classes(),
            vec![DinoClass::Troodon, DinoClass::Stegosaurus]
        );
    }

    #[test]
    fn test_first_invalid_name_rejects_everything() {
        assert_eq!(
            parse_selector::<DinoClass>(&args(&["Troodon", "Unicorn", "Dragon"]), false),
            Err(SelectorError::Unknown("Unicorn".to_string()))
        );
    }

    #[test]
    fn test_sentinel_inside_a_list_is_just_a_name() {
        assert_eq!(
            parse_selector::<DinoClass>(&args(&["Troodon", "all"]), false),
            Err(SelectorError::Unknown("all".to_string()))
        );
    }

    #[test]
    fn test_empty_arguments() {
        assert_eq!(
            parse_selector::<AiClass>(&[], true),
            Err(SelectorError::Empty)
        );
    }
}
