//! Section domain models.

use std::fmt;
use std::str::FromStr;

use raidexplorer_gw2_api::Scope;
use serde::{Deserialize, Serialize};

/// The data categories, in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Bosses,
    Currency,
    Achievements,
    Minis,
    Skins,
}

impl SectionKind {
    /// Every section, in the order a load cycle runs them.
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Bosses,
        SectionKind::Currency,
        SectionKind::Achievements,
        SectionKind::Minis,
        SectionKind::Skins,
    ];

    /// Stable lowercase key used in settings and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Bosses => "bosses",
            SectionKind::Currency => "currency",
            SectionKind::Achievements => "achievements",
            SectionKind::Minis => "minis",
            SectionKind::Skins => "skins",
        }
    }

    /// Name used in progress messages ("Loading Bosses section...").
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Bosses => "Bosses",
            SectionKind::Currency => "Currency",
            SectionKind::Achievements => "Achievements",
            SectionKind::Minis => "Minis",
            SectionKind::Skins => "Skins",
        }
    }

    /// Scopes a key must grant before this section fetches anything.
    pub fn required_scopes(&self) -> &'static [Scope] {
        match self {
            SectionKind::Bosses | SectionKind::Achievements => &[Scope::Progression],
            SectionKind::Currency => &[Scope::Inventories, Scope::Wallet, Scope::Characters],
            SectionKind::Minis | SectionKind::Skins => &[Scope::Unlocks],
        }
    }

    /// The user-facing note for a key that lacks the required scopes,
    /// e.g. "Currency needs: Inventories, Wallet, Characters".
    pub fn denial_message(&self) -> String {
        let (subject, verb) = match self {
            SectionKind::Bosses => ("Raid bosses", "need"),
            SectionKind::Currency => ("Currency", "needs"),
            SectionKind::Achievements => ("Achievements", "need"),
            SectionKind::Minis => ("Minis", "need"),
            SectionKind::Skins => ("Skins", "need"),
        };
        let scopes = self
            .required_scopes()
            .iter()
            .map(|scope| scope.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}: {}", subject, verb, scopes)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown section '{}' (expected one of: bosses, currency, achievements, minis, skins)",
                    s
                )
            })
    }
}

/// Pass/fail state of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFlag {
    pub id: String,
    pub slot: &'static str,
    pub done: bool,
}

/// Computed amount of one tracked currency.
///
/// `value` is `None` when a wallet currency is absent from the wallet, which
/// is distinct from holding zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyTotal {
    pub id: u32,
    pub slot: &'static str,
    pub value: Option<u64>,
}

/// A section skipped because the key lacks scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionDenial {
    pub section: SectionKind,
    pub missing: Vec<Scope>,
    pub message: String,
}

impl PermissionDenial {
    pub fn new(section: SectionKind, missing: Vec<Scope>) -> Self {
        Self {
            section,
            missing,
            message: section.denial_message(),
        }
    }
}

/// What a section produced in one load cycle. Fully replaces the prior result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SectionResult {
    /// One flag per catalog entry, in catalog order.
    Flags(Vec<ItemFlag>),
    /// Wallet currencies followed by inventory-counted currencies.
    Currency(Vec<CurrencyTotal>),
    /// Toggle off; displayed fields are cleared.
    Disabled,
    /// Required scopes missing; displayed fields are cleared.
    MissingPermission(PermissionDenial),
}

impl SectionResult {
    pub fn denial(&self) -> Option<&PermissionDenial> {
        match self {
            SectionResult::MissingPermission(denial) => Some(denial),
            _ => None,
        }
    }
}

/// Per-section enabled switches, read once at the start of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionToggles {
    pub bosses: bool,
    pub currency: bool,
    pub achievements: bool,
    pub minis: bool,
    pub skins: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self::all(true)
    }
}

impl SectionToggles {
    pub fn all(enabled: bool) -> Self {
        Self {
            bosses: enabled,
            currency: enabled,
            achievements: enabled,
            minis: enabled,
            skins: enabled,
        }
    }

    pub fn is_enabled(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Bosses => self.bosses,
            SectionKind::Currency => self.currency,
            SectionKind::Achievements => self.achievements,
            SectionKind::Minis => self.minis,
            SectionKind::Skins => self.skins,
        }
    }

    pub fn set(&mut self, kind: SectionKind, enabled: bool) {
        match kind {
            SectionKind::Bosses => self.bosses = enabled,
            SectionKind::Currency => self.currency = enabled,
            SectionKind::Achievements => self.achievements = enabled,
            SectionKind::Minis => self.minis = enabled,
            SectionKind::Skins => self.skins = enabled,
        }
    }

    /// Returns a copy with only `kinds` enabled.
    pub fn only(kinds: &[SectionKind]) -> Self {
        let mut toggles = Self::all(false);
        for kind in kinds {
            toggles.set(*kind, true);
        }
        toggles
    }

    /// Returns a copy with `kinds` disabled.
    pub fn without(mut self, kinds: &[SectionKind]) -> Self {
        for kind in kinds {
            self.set(*kind, false);
        }
        self
    }
}
