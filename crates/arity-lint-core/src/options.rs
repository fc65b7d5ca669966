//! Limit options and their resolution.
//!
//! A rule's limit options map override keys (call-target names or
//! signature categories) to integer ceilings, plus the reserved
//! [`GLOBAL_KEY`] fallback. A negative value disables the check for that
//! key. Configuredness is always decided by key presence, so a limit of
//! `0` is enforced rather than mistaken for "unset".

use std::collections::BTreeMap;

use crate::config::{ConfigError, RuleConfig};

/// Reserved key carrying the fallback limit.
pub const GLOBAL_KEY: &str = "global";

/// Smallest value accepted for a limit; `-1` means "no limit".
pub const MIN_LIMIT: i64 = -1;

/// Effective ceiling for one lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// No ceiling; the check never reports.
    Unbounded,
    /// At most this many.
    Max(u32),
}

impl Limit {
    /// Converts a raw configured value; negative values disable the check.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        u32::try_from(value).map_or(Self::Unbounded, Self::Max)
    }

    /// Returns the ceiling when `count` exceeds it.
    #[must_use]
    pub fn exceeded_by(self, count: usize) -> Option<u32> {
        match self {
            Self::Unbounded => None,
            Self::Max(max) => (count > max as usize).then_some(max),
        }
    }
}

/// Immutable map of limit overrides, parsed once per rule activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LimitOptions {
    limits: BTreeMap<String, i64>,
}

impl LimitOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one limit.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, limit: i64) -> Self {
        self.limits.insert(key.into(), limit);
        self
    }

    /// Builds limit options from a rule's configuration table.
    ///
    /// Every option other than `enabled` and `severity` is a limit. When
    /// `allowed_keys` is given, keys outside it are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLimit`] for values that are not
    /// integers of at least `-1`, and [`ConfigError::UnknownOption`] for
    /// keys outside `allowed_keys`.
    pub fn from_rule_config(
        rule: &str,
        config: &RuleConfig,
        allowed_keys: Option<&[&str]>,
    ) -> Result<Self, ConfigError> {
        let mut limits = BTreeMap::new();

        for (key, value) in &config.options {
            if let Some(allowed) = allowed_keys {
                if !allowed.contains(&key.as_str()) {
                    return Err(ConfigError::UnknownOption {
                        rule: rule.to_string(),
                        key: key.clone(),
                    });
                }
            }

            let limit = value
                .as_integer()
                .filter(|v| *v >= MIN_LIMIT)
                .ok_or_else(|| ConfigError::InvalidLimit {
                    rule: rule.to_string(),
                    key: key.clone(),
                    value: value.to_string(),
                })?;

            limits.insert(key.clone(), limit);
        }

        Ok(Self { limits })
    }

    /// Returns true if no limits are configured at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Returns true if `key` has a configured value, including `0` and negatives.
    #[must_use]
    pub fn is_configured(&self, key: &str) -> bool {
        self.limits.contains_key(key)
    }

    /// Returns the raw configured value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<i64> {
        self.limits.get(key).copied()
    }

    /// Resolves the effective limit for a lookup key.
    ///
    /// A configured `key` wins; otherwise `global` applies; otherwise the
    /// check is unbounded. An empty key never matches a specific override.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Limit {
        let specific = if key.is_empty() { None } else { self.get(key) };
        specific
            .or_else(|| self.get(GLOBAL_KEY))
            .map_or(Limit::Unbounded, Limit::from_raw)
    }

    /// Iterates over configured keys and raw values, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.limits.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_config(toml: &str) -> RuleConfig {
        toml::from_str(toml).expect("valid rule table")
    }

    #[test]
    fn test_zero_is_configured() {
        let options = LimitOptions::new().with("key", 0);
        assert!(options.is_configured("key"));
        assert!(!options.is_configured("notTheKey"));
        assert!(!LimitOptions::new().is_configured("key"));
    }

    #[test]
    fn test_specific_key_wins_over_global() {
        let options = LimitOptions::new().with("foo", 3).with(GLOBAL_KEY, 1);
        assert_eq!(options.resolve("foo"), Limit::Max(3));
        assert_eq!(options.resolve("bar"), Limit::Max(1));
    }

    #[test]
    fn test_zero_override_is_not_unset() {
        let options = LimitOptions::new().with("funcExpression", 0).with(GLOBAL_KEY, 4);
        assert_eq!(options.resolve("funcExpression"), Limit::Max(0));
    }

    #[test]
    fn test_negative_override_disables_despite_global() {
        let options = LimitOptions::new()
            .with("arrowFuncExpression", -1)
            .with(GLOBAL_KEY, 1);
        assert_eq!(options.resolve("arrowFuncExpression"), Limit::Unbounded);
        assert_eq!(options.resolve("funcDefinition"), Limit::Max(1));
    }

    #[test]
    fn test_nothing_configured_is_unbounded() {
        assert_eq!(LimitOptions::new().resolve("foo"), Limit::Unbounded);
        let options = LimitOptions::new().with("foo", 2);
        assert_eq!(options.resolve("bar"), Limit::Unbounded);
    }

    #[test]
    fn test_empty_key_only_sees_global() {
        let options = LimitOptions::new().with("", 0).with(GLOBAL_KEY, 5);
        assert_eq!(options.resolve(""), Limit::Max(5));
        assert_eq!(LimitOptions::new().with("", 0).resolve(""), Limit::Unbounded);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let options = LimitOptions::new().with("foo", 3).with(GLOBAL_KEY, 1);
        let first: Vec<Limit> = ["foo", "bar", ""].iter().map(|k| options.resolve(k)).collect();
        let second: Vec<Limit> = ["foo", "bar", ""].iter().map(|k| options.resolve(k)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exceeded_by() {
        assert_eq!(Limit::Max(1).exceeded_by(1), None);
        assert_eq!(Limit::Max(1).exceeded_by(2), Some(1));
        assert_eq!(Limit::Max(0).exceeded_by(0), None);
        assert_eq!(Limit::Max(0).exceeded_by(1), Some(0));
        assert_eq!(Limit::Unbounded.exceeded_by(usize::MAX), None);
    }

    #[test]
    fn test_from_raw_maps_negatives_to_unbounded() {
        assert_eq!(Limit::from_raw(-1), Limit::Unbounded);
        assert_eq!(Limit::from_raw(-7), Limit::Unbounded);
        assert_eq!(Limit::from_raw(0), Limit::Max(0));
        assert_eq!(Limit::from_raw(4), Limit::Max(4));
    }

    #[test]
    fn test_from_rule_config_skips_reserved_fields() {
        let config = rule_config("enabled = true\nseverity = \"warning\"\nfoo = 3\nglobal = 1\n");
        let options = LimitOptions::from_rule_config("func-args", &config, None).expect("valid");
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["foo", "global"]);
    }

    #[test]
    fn test_from_rule_config_rejects_non_integers() {
        let config = rule_config("foo = \"three\"\n");
        let err = LimitOptions::from_rule_config("func-args", &config, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit { ref key, .. } if key == "foo"));
    }

    #[test]
    fn test_from_rule_config_rejects_below_minus_one() {
        let config = rule_config("global = -2\n");
        assert!(LimitOptions::from_rule_config("func-params", &config, None).is_err());
    }

    #[test]
    fn test_from_rule_config_rejects_unknown_keys() {
        let config = rule_config("funcDefinition = 2\nfuncDefinitions = 3\n");
        let err = LimitOptions::from_rule_config(
            "func-params",
            &config,
            Some(&["global", "funcDefinition"]),
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownOption { ref key, .. } if key == "funcDefinitions")
        );
    }

    #[test]
    fn test_empty_table_is_empty_options() {
        let options =
            LimitOptions::from_rule_config("func-args", &RuleConfig::default(), None).expect("ok");
        assert!(options.is_empty());
    }
}
