use std::collections::BTreeSet;

use log::debug;
use raidexplorer_gw2_api::Scope;
use serde::Serialize;

/// Scopes granted to an API key, resolved once per load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GrantSet {
    scopes: BTreeSet<Scope>,
}

/// Whether one scope is granted, for the permission listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeStatus {
    pub scope: Scope,
    pub granted: bool,
}

impl GrantSet {
    /// Builds a grant set from scope names as reported by `tokeninfo`.
    ///
    /// Names this application does not know are skipped.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let scopes = names
            .iter()
            .filter_map(|name| match name.as_ref().parse::<Scope>() {
                Ok(scope) => Some(scope),
                Err(_) => {
                    debug!("[Permissions] Ignoring unknown scope '{}'", name.as_ref());
                    None
                }
            })
            .collect();
        Self { scopes }
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.scopes.contains(&scope)
    }

    pub fn contains_all(&self, required: &[Scope]) -> bool {
        required.iter().all(|scope| self.contains(*scope))
    }

    /// Required scopes that are not granted, in the order given.
    pub fn missing(&self, required: &[Scope]) -> Vec<Scope> {
        required
            .iter()
            .copied()
            .filter(|scope| !self.contains(*scope))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Scope> + '_ {
        self.scopes.iter().copied()
    }

    /// Status of every known scope, in display order.
    pub fn statuses(&self) -> Vec<ScopeStatus> {
        Scope::ALL
            .iter()
            .map(|scope| ScopeStatus {
                scope: *scope,
                granted: self.contains(*scope),
            })
            .collect()
    }
}

impl FromIterator<Scope> for GrantSet {
    fn from_iter<T: IntoIterator<Item = Scope>>(iter: T) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}
