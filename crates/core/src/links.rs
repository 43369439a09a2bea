//! Reference websites for raiders.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub static REFERENCE_LINKS: &[ReferenceLink] = &[
    ReferenceLink {
        name: "API keys",
        url: "https://account.arena.net/applications",
        description: "Create and manage your API keys",
    },
    ReferenceLink {
        name: "Snow Crows",
        url: "https://www.snowcrows.com",
        description: "Raid builds",
    },
    ReferenceLink {
        name: "MetaBattle",
        url: "http://metabattle.com/wiki/Raid",
        description: "Alternative raid builds",
    },
    ReferenceLink {
        name: "dps.report",
        url: "https://dps.report/",
        description: "Upload and share combat logs",
    },
    ReferenceLink {
        name: "Killproof.me",
        url: "https://killproof.me",
        description: "Public proof of raid kills",
    },
    ReferenceLink {
        name: "GW2 Raidar",
        url: "https://www.gw2raidar.com",
        description: "Raid log analysis",
    },
    ReferenceLink {
        name: "ArcDps",
        url: "https://www.deltaconnected.com/arcdps/",
        description: "Combat metrics plugin",
    },
    ReferenceLink {
        name: "ArcDps Mechanics",
        url: "http://martionlabs.com/arcdps-mechanics-log-plugin/",
        description: "Mechanics log plugin for ArcDps",
    },
    ReferenceLink {
        name: "Dulfy raid guides",
        url: "http://dulfy.net/category/gw2/raid-guides/",
        description: "Encounter guides",
    },
    ReferenceLink {
        name: "Raid Explorer",
        url: "https://github.com/Aens/Gw2RaidExplorer",
        description: "Project page",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_are_absolute_and_unique() {
        let mut urls: Vec<&str> = REFERENCE_LINKS.iter().map(|l| l.url).collect();
        assert!(urls.iter().all(|u| u.starts_with("http")));
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), REFERENCE_LINKS.len());
    }
}
