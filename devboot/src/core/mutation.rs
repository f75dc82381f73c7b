//! Ordered environment mutations and their merged result.

use std::collections::BTreeMap;

/// Sorted `key -> value` view of an environment.
pub type EnvMap = BTreeMap<String, String>;

/// A single environment change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOp {
    Set { key: String, value: String },
    Unset { key: String },
}

/// Ordered sequence of environment changes.
///
/// Later operations on a key override earlier ones. Nothing here touches the
/// real process environment; callers apply [`MergedEnv`] themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentMutation {
    ops: Vec<MutationOp>,
}

impl EnvironmentMutation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.ops.push(MutationOp::Set {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn unset(&mut self, key: impl Into<String>) {
        self.ops.push(MutationOp::Unset { key: key.into() });
    }

    /// Append every operation of `other` after the current ones.
    pub fn extend(&mut self, other: EnvironmentMutation) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[MutationOp] {
        &self.ops
    }

    /// Fold the operations into final assignments and removals.
    ///
    /// Assignments keep the position at which their key was first set; a key
    /// that is set again after being unset moves to the end.
    pub fn merge(&self) -> MergedEnv {
        let mut vars: Vec<(String, String)> = Vec::new();
        let mut removed: Vec<String> = Vec::new();
        for op in &self.ops {
            match op {
                MutationOp::Set { key, value } => {
                    removed.retain(|k| k != key);
                    match vars.iter_mut().find(|(k, _)| k == key) {
                        Some(entry) => entry.1.clone_from(value),
                        None => vars.push((key.clone(), value.clone())),
                    }
                }
                MutationOp::Unset { key } => {
                    vars.retain(|(k, _)| k != key);
                    if !removed.contains(key) {
                        removed.push(key.clone());
                    }
                }
            }
        }
        MergedEnv { vars, removed }
    }
}

/// Final effect of an [`EnvironmentMutation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedEnv {
    /// Assignments in application order.
    pub vars: Vec<(String, String)>,
    /// Keys to remove from the environment.
    pub removed: Vec<String>,
}

impl MergedEnv {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_map(&self) -> EnvMap {
        self.vars.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_set_overrides_earlier() {
        let mut m = EnvironmentMutation::new();
        m.set("A", "1");
        m.set("B", "2");
        m.set("A", "3");
        let merged = m.merge();
        assert_eq!(
            merged.vars,
            vec![
                ("A".to_string(), "3".to_string()),
                ("B".to_string(), "2".to_string())
            ]
        );
        assert!(merged.removed.is_empty());
    }

    #[test]
    fn unset_removes_prior_assignment() {
        let mut m = EnvironmentMutation::new();
        m.set("PYTHONHOME", "/opt/python");
        m.set("A", "1");
        m.unset("PYTHONHOME");
        let merged = m.merge();
        assert_eq!(merged.get("PYTHONHOME"), None);
        assert_eq!(merged.removed, vec!["PYTHONHOME".to_string()]);
        assert_eq!(merged.to_map().len(), 1);
    }

    #[test]
    fn set_after_unset_restores_key() {
        let mut m = EnvironmentMutation::new();
        m.set("A", "1");
        m.set("B", "2");
        m.unset("A");
        m.set("A", "4");
        let merged = m.merge();
        assert_eq!(
            merged.vars,
            vec![
                ("B".to_string(), "2".to_string()),
                ("A".to_string(), "4".to_string())
            ]
        );
        assert!(merged.removed.is_empty());
    }

    #[test]
    fn extend_appends_in_order() {
        let mut first = EnvironmentMutation::new();
        first.set("PATH", "/usr/bin");
        let mut second = EnvironmentMutation::new();
        second.set("PATH", "/venv/bin:/usr/bin");
        first.extend(second);
        assert_eq!(first.ops().len(), 2);
        assert_eq!(first.merge().get("PATH"), Some("/venv/bin:/usr/bin"));
    }
}
