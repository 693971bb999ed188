//! blacklist.rs - The frozen, immutable set of tracking parameter names.
//!
//! A [`Blacklist`] is built once from a [`BlacklistConfig`] at startup and is
//! shared (behind an `Arc`) by every trigger for the rest of the process
//! lifetime. Lookups are O(1); iteration yields names in configuration order.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashSet;

use crate::config::BlacklistConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl Blacklist {
    /// Freezes the enabled params of `config`. Duplicates keep their first position.
    pub fn from_config(config: &BlacklistConfig) -> Self {
        let blacklist = Self::from_names(config.enabled_names());
        debug!(
            "Blacklist frozen with {} of {} configured params.",
            blacklist.len(),
            config.params.len()
        );
        blacklist
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();
        for name in names {
            let name: String = name.into();
            if lookup.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { ordered, lookup }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlacklistedParam;

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let blacklist = Blacklist::from_names(["fbclid", "utm_source", "fbclid"]);
        assert_eq!(blacklist.iter().collect::<Vec<_>>(), vec!["fbclid", "utm_source"]);
    }

    #[test]
    fn disabled_params_are_not_frozen() {
        let config = BlacklistConfig {
            params: vec![
                BlacklistedParam::named("gclid"),
                BlacklistedParam { enabled: Some(false), ..BlacklistedParam::named("si") },
            ],
        };
        let blacklist = Blacklist::from_config(&config);
        assert!(blacklist.contains("gclid"));
        assert!(!blacklist.contains("si"));
    }
}
