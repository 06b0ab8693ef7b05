//! Achievement catalog invariants.

use std::collections::HashSet;

use chrono::Utc;
use promptlab::model::{AchievementCategory, AchievementRarity};
use promptlab::progress::catalog::{self, CATALOG};

#[test]
fn catalog_has_fifteen_unique_entries() {
    assert_eq!(CATALOG.len(), 15);

    let ids: HashSet<&str> = CATALOG.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), CATALOG.len());

    let titles: HashSet<&str> = CATALOG.iter().map(|d| d.title).collect();
    assert_eq!(titles.len(), CATALOG.len());
}

#[test]
fn every_entry_carries_a_positive_reward_and_an_icon() {
    for def in &CATALOG {
        assert!(def.xp_reward > 0, "{} has no reward", def.id);
        assert!(!def.icon.is_empty(), "{} has no icon", def.id);
        assert!(!def.description.is_empty(), "{} has no description", def.id);
    }
}

#[test]
fn all_five_categories_and_all_four_rarities_are_represented() {
    let categories: HashSet<AchievementCategory> = CATALOG.iter().map(|d| d.category).collect();
    assert_eq!(categories.len(), 5);

    let rarities: HashSet<AchievementRarity> = CATALOG.iter().map(|d| d.rarity).collect();
    assert_eq!(rarities.len(), 4);
}

#[test]
fn legendary_rewards_outweigh_common_ones() {
    let min_legendary = CATALOG
        .iter()
        .filter(|d| d.rarity == AchievementRarity::Legendary)
        .map(|d| d.xp_reward)
        .min()
        .unwrap();
    let max_common = CATALOG
        .iter()
        .filter(|d| d.rarity == AchievementRarity::Common)
        .map(|d| d.xp_reward)
        .max()
        .unwrap();

    assert!(min_legendary > max_common);
}

#[test]
fn lookup_by_id() {
    let def = catalog::by_id("grandmaster").unwrap();
    assert_eq!(def.title, "Grandmaster");
    assert_eq!(def.rarity, AchievementRarity::Legendary);
    assert_eq!(def.xp_reward, 1000);

    assert!(catalog::by_id("no_such_achievement").is_none());
}

#[test]
fn unlock_mints_an_achievement_with_the_given_time() {
    let now = Utc::now();
    let def = catalog::by_id("first_perfect").unwrap();
    let achievement = def.unlock(now);

    assert_eq!(achievement.id, "first_perfect");
    assert_eq!(achievement.xp_reward, def.xp_reward);
    assert_eq!(achievement.unlocked_at, now);
}
