use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    List,
    Read,
    Write,
    Delete,
    Own,
}

impl Capability {
    pub const ALL: [Capability; 5] = [Capability::List, Capability::Read, Capability::Write, Capability::Delete, Capability::Own];

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::List => "list",
            Capability::Read => "read",
            Capability::Write => "write",
            Capability::Delete => "delete",
            Capability::Own => "own",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

/// Immutable capability record. Anything not explicitly granted is denied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    grants: BTreeMap<Capability, bool>,
}

impl PermissionSet {
    pub fn from_pairs<I: IntoIterator<Item = (Capability, bool)>>(pairs: I) -> Self {
        Self { grants: pairs.into_iter().collect() }
    }

    /// Build from capability names; names that are not capabilities are dropped.
    pub fn from_names(map: &HashMap<String, bool>) -> Self {
        Self::from_pairs(map.iter().filter_map(|(k, v)| Capability::parse(k).map(|c| (c, *v))))
    }

    pub fn none() -> Self { Self::default() }

    pub fn full() -> Self {
        Self::from_pairs(Capability::ALL.into_iter().map(|c| (c, true)))
    }

    pub fn allow(&self, cap: Capability) -> bool {
        self.grants.get(&cap).copied().unwrap_or(false)
    }

    pub fn can_list(&self) -> bool { self.allow(Capability::List) }
    pub fn can_read(&self) -> bool { self.allow(Capability::Read) }
    pub fn can_write(&self) -> bool { self.allow(Capability::Write) }
    pub fn can_delete(&self) -> bool { self.allow(Capability::Delete) }
    pub fn can_own(&self) -> bool { self.allow(Capability::Own) }

    /// Copy with the given capabilities forced off.
    pub fn without(&self, caps: &[Capability]) -> Self {
        let mut grants = self.grants.clone();
        for c in caps {
            grants.insert(*c, false);
        }
        Self { grants }
    }

    /// Granted capability names, for logs.
    pub fn granted(&self) -> Vec<&'static str> {
        self.grants.iter().filter(|(_, v)| **v).map(|(k, _)| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capabilities_are_denied() {
        let p = PermissionSet::from_pairs([(Capability::Read, true)]);
        assert!(p.can_read());
        assert!(!p.can_list());
        assert!(!p.can_write());
        assert!(!PermissionSet::none().allow(Capability::Own));
    }

    #[test]
    fn from_names_ignores_unknown_keys() {
        let mut m = HashMap::new();
        m.insert("WRITE".to_string(), true);
        m.insert("share".to_string(), true);
        m.insert("delete".to_string(), false);
        let p = PermissionSet::from_names(&m);
        assert!(p.can_write());
        assert!(!p.can_delete());
        assert_eq!(p.granted(), vec!["write"]);
    }

    #[test]
    fn without_forces_capabilities_off() {
        let p = PermissionSet::full().without(&[Capability::Write, Capability::Delete]);
        assert!(p.can_read() && p.can_list() && p.can_own());
        assert!(!p.can_write() && !p.can_delete());
    }

    #[test]
    fn serializes_as_flat_map() {
        let p = PermissionSet::from_pairs([(Capability::List, true), (Capability::Write, false)]);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v, serde_json::json!({"list": true, "write": false}));
    }
}
