use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Response of the `tokeninfo` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw scope names granted to the key (e.g. "account", "progression").
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A capability scope an API key may grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Account,
    Builds,
    Characters,
    Guilds,
    Inventories,
    Progression,
    Pvp,
    Tradingpost,
    Unlocks,
    Wallet,
}

impl Scope {
    /// Every scope the API knows about, in display order.
    pub const ALL: [Scope; 10] = [
        Scope::Account,
        Scope::Builds,
        Scope::Characters,
        Scope::Guilds,
        Scope::Inventories,
        Scope::Progression,
        Scope::Pvp,
        Scope::Tradingpost,
        Scope::Unlocks,
        Scope::Wallet,
    ];

    /// The scope name as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Account => "account",
            Scope::Builds => "builds",
            Scope::Characters => "characters",
            Scope::Guilds => "guilds",
            Scope::Inventories => "inventories",
            Scope::Progression => "progression",
            Scope::Pvp => "pvp",
            Scope::Tradingpost => "tradingpost",
            Scope::Unlocks => "unlocks",
            Scope::Wallet => "wallet",
        }
    }

    /// Human-readable label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Account => "Account",
            Scope::Builds => "Builds",
            Scope::Characters => "Characters",
            Scope::Guilds => "Guilds",
            Scope::Inventories => "Inventories",
            Scope::Progression => "Progression",
            Scope::Pvp => "PvP",
            Scope::Tradingpost => "Tradingpost",
            Scope::Unlocks => "Unlocks",
            Scope::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown scope: {}", s))
    }
}
