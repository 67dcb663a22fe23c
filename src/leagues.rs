//! League tiers.
//!
//! Leagues are cosmetic competitive tiers. Each tier promotes the top of its
//! weekly table and demotes the bottom.

use serde::{Deserialize, Serialize};

/// League tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum League {
    #[default]
    Bronze,
    Silver,
    Gold,
    Diamond,
    Obsidian,
}

impl League {
    /// All tiers, lowest first.
    pub const ALL: [League; 5] = [
        League::Bronze,
        League::Silver,
        League::Gold,
        League::Diamond,
        League::Obsidian,
    ];

    /// 1-based tier order.
    pub fn order(&self) -> u8 {
        match self {
            League::Bronze => 1,
            League::Silver => 2,
            League::Gold => 3,
            League::Diamond => 4,
            League::Obsidian => 5,
        }
    }

    /// Number of top ranks promoted at the end of the week.
    pub fn promo_zone(&self) -> usize {
        match self {
            League::Bronze | League::Silver | League::Gold => 5,
            League::Diamond => 3,
            League::Obsidian => 0,
        }
    }

    /// Number of bottom ranks demoted at the end of the week.
    pub fn demote_zone(&self) -> usize {
        match self {
            League::Bronze => 0,
            League::Silver | League::Gold | League::Diamond => 15,
            League::Obsidian => 10,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            League::Bronze => "🛡️",
            League::Silver => "⚔️",
            League::Gold => "👑",
            League::Diamond => "💎",
            League::Obsidian => "🔮",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            League::Bronze => "Bronze",
            League::Silver => "Silver",
            League::Gold => "Gold",
            League::Diamond => "Diamond",
            League::Obsidian => "Obsidian",
        }
    }

    /// One-line description of the weekly movement rules.
    pub fn zone_summary(&self) -> String {
        match (self.promo_zone(), self.demote_zone()) {
            (0, 0) => "No promotion or demotion".to_string(),
            (p, 0) => format!("Top {} promote", p),
            (0, d) => format!("Bottom {} demote", d),
            (p, d) => format!("Top {} promote, bottom {} demote", p, d),
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
