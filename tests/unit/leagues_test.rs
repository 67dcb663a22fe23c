//! Unit tests for league tiers.

use lingoquest::leagues::League;

#[test]
fn test_tiers_are_ordered() {
    let orders: Vec<u8> = League::ALL.iter().map(|l| l.order()).collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    assert!(League::Bronze < League::Obsidian);
    assert_eq!(League::default(), League::Bronze);
}

#[test]
fn test_zone_table() {
    let zones: Vec<(usize, usize)> = League::ALL
        .iter()
        .map(|l| (l.promo_zone(), l.demote_zone()))
        .collect();
    assert_eq!(zones, vec![(5, 0), (5, 15), (5, 15), (3, 15), (0, 10)]);
}

#[test]
fn test_zone_summary_for_middle_tier() {
    assert_eq!(League::Diamond.zone_summary(), "Top 3 promote, bottom 15 demote");
}

#[test]
fn test_league_serializes_by_name() {
    let json = serde_json::to_string(&League::Diamond).unwrap();
    assert_eq!(json, "\"Diamond\"");
    assert_eq!(League::Diamond.to_string(), "Diamond");
}
