//! Raid achievements tracked per wing.

use super::CatalogEntry;

pub static ACHIEVEMENTS: &[CatalogEntry<u32>] = &[
    // Wing 1
    CatalogEntry::new(2657, "w1_closure"),
    CatalogEntry::new(2651, "w1_lootfinder"),
    CatalogEntry::new(2663, "w1_piecingit"),
    CatalogEntry::new(2654, "w1_beyondthevale"),
    CatalogEntry::new(2658, "w1_fleethestorm"),
    CatalogEntry::new(2655, "w1_rgb"),
    CatalogEntry::new(2656, "w1_whitenoise"),
    CatalogEntry::new(2647, "w1_intothewoods"),
    CatalogEntry::new(2660, "w1_outranaghost"),
    CatalogEntry::new(2665, "w1_keepthelights"),
    CatalogEntry::new(2662, "w1_quickmarch"),
    CatalogEntry::new(2667, "w1_puttorest"),
    CatalogEntry::new(2666, "w1_angermanage"),
    CatalogEntry::new(2649, "w1_denied"),
    CatalogEntry::new(2648, "w1_spectralanomaly"),
    CatalogEntry::new(2659, "w1_fireextinguish"),
    CatalogEntry::new(2664, "w1_backdraftd"),
    CatalogEntry::new(2652, "w1_lastcannon"),
    CatalogEntry::new(2661, "w1_liftoff"),
    CatalogEntry::new(2668, "w1_myhero"),
    CatalogEntry::new(2653, "w1_undefeated"),

    // Wing 2
    CatalogEntry::new(2832, "w2_scatteredm"),
    CatalogEntry::new(2826, "w2_thebigsleep"),
    CatalogEntry::new(2824, "w2_spmastery"),
    CatalogEntry::new(2830, "w2_theshield"),
    CatalogEntry::new(2821, "w2_seimurwasw"),
    CatalogEntry::new(2836, "w2_avengerofpact"),
    CatalogEntry::new(2831, "w2_slipperyslub"),
    CatalogEntry::new(2835, "w2_environmentally"),
    CatalogEntry::new(2823, "w2_spsadist"),

    // Wing 3
    CatalogEntry::new(3024, "w3_siegethestrong"),
    CatalogEntry::new(3021, "w3_minecontrol"),
    CatalogEntry::new(3016, "w3_scourgeofwm"),
    CatalogEntry::new(3014, "w3_deconstructed"),
    CatalogEntry::new(3010, "w3_traversethetc"),
    CatalogEntry::new(3017, "w3_dismantled"),
    CatalogEntry::new(3019, "w3_downdownd"),
    CatalogEntry::new(3011, "w3_evasivemane"),
    CatalogEntry::new(3022, "w3_outrunawarg"),
    CatalogEntry::new(3025, "w3_loveisbunny"),
    CatalogEntry::new(3013, "w3_mildlyinsane"),

    // Wing 4
    CatalogEntry::new(3287, "w4_attuned"),
    CatalogEntry::new(3349, "w4_breakingin"),
    CatalogEntry::new(3364, "w4_freeatlast"),
    CatalogEntry::new(3299, "w4_greetedaslib"),
    CatalogEntry::new(3342, "w4_harshsentence"),
    CatalogEntry::new(3321, "w4_justagame"),
    CatalogEntry::new(3334, "w4_jaded"),
    CatalogEntry::new(3292, "w4_solitaryconfi"),
    CatalogEntry::new(3347, "w4_wardenwillsee"),
    CatalogEntry::new(3296, "w4_voiceofdecease"),
    CatalogEntry::new(3392, "w4_realraidertyr"),

    // Wing 5
    CatalogEntry::new(4020, "w5_silencer"),
    CatalogEntry::new(3979, "w5_deatheater"),
    CatalogEntry::new(3998, "w5_deathsaver"),
    CatalogEntry::new(3993, "w5_exileexecution"),
    CatalogEntry::new(4038, "w5_icebreaker"),
    CatalogEntry::new(4033, "w5_necrodancer"),
    CatalogEntry::new(4036, "w5_soreeyes"),
    CatalogEntry::new(4004, "w5_souledout"),
    CatalogEntry::new(4037, "w5_statuesoflimit"),
    CatalogEntry::new(4010, "w5_theferrywoman"),
    CatalogEntry::new(4016, "w5_whatisdeathmay"),

    // Wing 6
    CatalogEntry::new(4423, "w6_thunderfall"),
    CatalogEntry::new(4364, "w6_aquaassasins"),
    CatalogEntry::new(4397, "w6_dontgowater"),
    CatalogEntry::new(4415, "w6_hardhats"),
    CatalogEntry::new(4355, "w6_heroesofforge"),
    CatalogEntry::new(4429, "w6_letsnotdothat"),
    CatalogEntry::new(4361, "w6_manipulateman"),
    CatalogEntry::new(4409, "w6_mythscholar"),
    CatalogEntry::new(4395, "w6_regularstour"),
    CatalogEntry::new(4416, "w6_somedisassem"),
    CatalogEntry::new(4388, "w6_stackingswords"),
    CatalogEntry::new(4404, "w6_takingturns"),
    CatalogEntry::new(4396, "w6_firedjinnextin"),
];
