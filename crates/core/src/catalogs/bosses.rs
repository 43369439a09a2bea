//! Raid encounters, identified by the ids `account/raids` reports.

use super::CatalogEntry;

pub static BOSSES: &[CatalogEntry<&'static str>] = &[
    // Spirit Vale
    CatalogEntry::new("vale_guardian", "valeguardian"),
    CatalogEntry::new("spirit_woods", "spiritwoods"),
    CatalogEntry::new("gorseval", "gorseval"),
    CatalogEntry::new("sabetha", "sabetha"),

    // Salvation Pass
    CatalogEntry::new("slothasor", "slothasor"),
    CatalogEntry::new("bandit_trio", "trio"),
    CatalogEntry::new("matthias", "matthias"),

    // Stronghold of the Faithful
    CatalogEntry::new("escort", "glenna"),
    CatalogEntry::new("keep_construct", "keepconstruct"),
    CatalogEntry::new("twisted_castle", "twistedcastle"),
    CatalogEntry::new("xera", "xera"),

    // Bastion of the Penitent
    CatalogEntry::new("cairn", "cairn"),
    CatalogEntry::new("mursaat_overseer", "mursaat"),
    CatalogEntry::new("samarog", "samarog"),
    CatalogEntry::new("deimos", "deimos"),

    // Hall of Chains
    CatalogEntry::new("soulless_horror", "desmina"),
    CatalogEntry::new("river_of_souls", "riverofsouls"),
    CatalogEntry::new("statues_of_grenth", "statues"),
    CatalogEntry::new("voice_in_the_void", "dhuum"),

    // Mythwright Gambit
    CatalogEntry::new("conjured_amalgamate", "conjureda"),
    CatalogEntry::new("twin_largos", "twinlargos"),
    CatalogEntry::new("qadim", "qadim"),
];
