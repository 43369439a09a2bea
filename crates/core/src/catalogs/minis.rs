//! Miniatures dropped by raid encounters.

use super::CatalogEntry;

pub static MINIS: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(371, "redguardian"),
    CatalogEntry::new(376, "greenguardian"),
    CatalogEntry::new(373, "blueguardian"),
    CatalogEntry::new(368, "valeguardian"),
    CatalogEntry::new(372, "gorseval"),
    CatalogEntry::new(377, "knuckles"),
    CatalogEntry::new(375, "kernan"),
    CatalogEntry::new(370, "karde"),
    CatalogEntry::new(390, "slubling"),
    CatalogEntry::new(389, "slothasor"),
    CatalogEntry::new(393, "berg"),
    CatalogEntry::new(394, "zane"),
    CatalogEntry::new(392, "narella"),
    CatalogEntry::new(391, "matthias"),
    CatalogEntry::new(402, "mcleod"),
    CatalogEntry::new(403, "keepconstruct"),
    CatalogEntry::new(401, "xera"),
    CatalogEntry::new(441, "cairn"),
    CatalogEntry::new(438, "mursaat"),
    CatalogEntry::new(447, "eyeofjanthir"),
    CatalogEntry::new(442, "samarog"),
    CatalogEntry::new(440, "whitemantle"),
    CatalogEntry::new(436, "ragged_whitemantle"),
    CatalogEntry::new(622, "desmina"),
    CatalogEntry::new(621, "brokenking"),
    CatalogEntry::new(623, "dhuum"),
    CatalogEntry::new(722, "zommoros"),
    CatalogEntry::new(721, "kenut"),
    CatalogEntry::new(725, "nikare"),
    CatalogEntry::new(723, "qadim"),
];
