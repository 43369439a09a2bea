//! Weapon and armor skins dropped by raid encounters.

use super::CatalogEntry;

pub static SKINS: &[CatalogEntry<u32>] = &[
    CatalogEntry::new(6528, "vg_dagger"),
    CatalogEntry::new(6532, "vg_greatsword"),
    CatalogEntry::new(6536, "gorse_shield"),
    CatalogEntry::new(6531, "gorse_staff"),
    CatalogEntry::new(6141, "sab_rifle"),
    CatalogEntry::new(6135, "sab_back"),
    CatalogEntry::new(6642, "sloth_hammer"),
    CatalogEntry::new(6639, "sloth_focus"),
    CatalogEntry::new(6645, "matthias_staff"),
    CatalogEntry::new(6630, "matthias_greatsword"),
    CatalogEntry::new(6652, "matthias_longbow"),
    CatalogEntry::new(6638, "matthias_shortbow"),
    CatalogEntry::new(6649, "matthias_mace"),
    CatalogEntry::new(6651, "matthias_shield"),
    CatalogEntry::new(6626, "matthias_warhorn"),
    CatalogEntry::new(6635, "matthias_pistol"),
    CatalogEntry::new(6633, "matthias_torch"),
    CatalogEntry::new(6805, "kc_hammer"),
    CatalogEntry::new(6836, "kc_torch"),
    CatalogEntry::new(6821, "kc_focus"),
    CatalogEntry::new(6804, "kc_scepter"),
    CatalogEntry::new(6813, "xera_scepter"),
    CatalogEntry::new(6825, "xera_staff"),
    CatalogEntry::new(6835, "xera_rifle"),
    CatalogEntry::new(6788, "xera_sword"),
    CatalogEntry::new(6810, "xera_axe"),
    CatalogEntry::new(6815, "xera_dagger"),
    CatalogEntry::new(6809, "xera_back"),
    CatalogEntry::new(7101, "cairn_pistol"),
    CatalogEntry::new(7125, "cairn_sword"),
    CatalogEntry::new(7097, "mursaat_longbow"),
    CatalogEntry::new(7091, "samarog_axe"),
    CatalogEntry::new(7155, "samarog_shortbow"),
    CatalogEntry::new(7113, "samarog_staff"),
    CatalogEntry::new(7147, "samarog_warhorn"),
    CatalogEntry::new(7076, "deimos_mace"),
    CatalogEntry::new(7151, "deimos_hammer"),
    CatalogEntry::new(7104, "deimos_staff"),
    CatalogEntry::new(7114, "deimos_back"),
    CatalogEntry::new(7115, "deimos_gloves"),
    CatalogEntry::new(7909, "desmina_axe"),
    CatalogEntry::new(7894, "desmina_hammer"),
    CatalogEntry::new(7845, "river_shield"),
    CatalogEntry::new(7863, "river_sword"),
    CatalogEntry::new(7867, "statues_dagger"),
    CatalogEntry::new(7910, "statues_greatsword"),
    CatalogEntry::new(7881, "dhuum_staff"),
    CatalogEntry::new(7872, "dhuum_helm"),
    CatalogEntry::new(7871, "dhuum_shoulders"),
    CatalogEntry::new(7848, "dhuum_gloves"),
    CatalogEntry::new(7887, "dhuum_boots"),
    CatalogEntry::new(8412, "conjured_shield"),
    CatalogEntry::new(8398, "conjured_greatsword"),
    CatalogEntry::new(8337, "largos_sword"),
    CatalogEntry::new(8363, "largos_longbow"),
    CatalogEntry::new(8344, "qadim_mace"),
    CatalogEntry::new(8409, "qadim_pistol"),
];
