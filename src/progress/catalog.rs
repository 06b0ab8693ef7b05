//! The achievement catalog: 15 immutable definitions.
//!
//! Read-only after initialization. Each unlock predicate is a pure
//! function of the identity plus its history with the new result
//! appended.

use chrono::{DateTime, NaiveDate, Utc};

use super::history;
use crate::model::{
    Achievement, AchievementCategory, AchievementRarity, Profile, PromptAnalysisResult,
    PromptQuality,
};

/// A catalog entry. `unlocked_at` is absent by construction — it only
/// exists on the [`Achievement`] minted at unlock time.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub rarity: AchievementRarity,
    pub xp_reward: u32,
}

impl AchievementDef {
    /// Mint the unlocked achievement carried on a profile.
    pub fn unlock(&self, at: DateTime<Utc>) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            category: self.category,
            rarity: self.rarity,
            xp_reward: self.xp_reward,
            unlocked_at: at,
        }
    }
}

pub const CATALOG: [AchievementDef; 15] = [
    // Quality
    AchievementDef {
        id: "first_perfect",
        title: "Perfect Debut",
        description: "Score a perfect 100 on your first try!",
        icon: "🎯",
        category: AchievementCategory::Quality,
        rarity: AchievementRarity::Rare,
        xp_reward: 50,
    },
    AchievementDef {
        id: "perfectionist",
        title: "Perfectionist",
        description: "Score 100 points on 5 different prompts",
        icon: "💎",
        category: AchievementCategory::Quality,
        rarity: AchievementRarity::Epic,
        xp_reward: 100,
    },
    AchievementDef {
        id: "excellence_seeker",
        title: "Excellence Seeker",
        description: "Score above 90 on 10 prompts",
        icon: "⭐",
        category: AchievementCategory::Quality,
        rarity: AchievementRarity::Common,
        xp_reward: 25,
    },
    // Consistency
    AchievementDef {
        id: "daily_habit",
        title: "Daily Habit",
        description: "Analyze prompts for 7 days in a row",
        icon: "📅",
        category: AchievementCategory::Consistency,
        rarity: AchievementRarity::Common,
        xp_reward: 75,
    },
    AchievementDef {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Maintain a 14-day streak",
        icon: "🔥",
        category: AchievementCategory::Consistency,
        rarity: AchievementRarity::Rare,
        xp_reward: 150,
    },
    AchievementDef {
        id: "month_master",
        title: "Month Master",
        description: "Keep your streak alive for 30 days!",
        icon: "👑",
        category: AchievementCategory::Consistency,
        rarity: AchievementRarity::Legendary,
        xp_reward: 500,
    },
    // Improvement
    AchievementDef {
        id: "getting_better",
        title: "Getting Better",
        description: "Improve your prompt score by 20+ points",
        icon: "📈",
        category: AchievementCategory::Improvement,
        rarity: AchievementRarity::Common,
        xp_reward: 30,
    },
    AchievementDef {
        id: "comeback_king",
        title: "Comeback King",
        description: "Turn a Poor prompt into an Excellent one",
        icon: "🚀",
        category: AchievementCategory::Improvement,
        rarity: AchievementRarity::Rare,
        xp_reward: 75,
    },
    AchievementDef {
        id: "learning_curve",
        title: "Learning Curve",
        description: "Show consistent improvement over 5 prompts",
        icon: "🎓",
        category: AchievementCategory::Improvement,
        rarity: AchievementRarity::Rare,
        xp_reward: 100,
    },
    // Exploration
    AchievementDef {
        id: "category_explorer",
        title: "Category Explorer",
        description: "Try all 6 prompt categories",
        icon: "🗺️",
        category: AchievementCategory::Exploration,
        rarity: AchievementRarity::Common,
        xp_reward: 50,
    },
    AchievementDef {
        id: "versatile_prompter",
        title: "Versatile Prompter",
        description: "Score above 80 in 4 different categories",
        icon: "🎭",
        category: AchievementCategory::Exploration,
        rarity: AchievementRarity::Epic,
        xp_reward: 125,
    },
    AchievementDef {
        id: "token_economist",
        title: "Token Economist",
        description: "Create a high-scoring prompt under 20 tokens",
        icon: "💰",
        category: AchievementCategory::Exploration,
        rarity: AchievementRarity::Rare,
        xp_reward: 60,
    },
    // Mastery
    AchievementDef {
        id: "prompt_master",
        title: "Prompt Master",
        description: "Analyze 100 prompts",
        icon: "🎖️",
        category: AchievementCategory::Mastery,
        rarity: AchievementRarity::Epic,
        xp_reward: 200,
    },
    AchievementDef {
        id: "grandmaster",
        title: "Grandmaster",
        description: "Reach level 10",
        icon: "🏆",
        category: AchievementCategory::Mastery,
        rarity: AchievementRarity::Legendary,
        xp_reward: 1000,
    },
    AchievementDef {
        id: "ai_whisperer",
        title: "AI Whisperer",
        description: "Maintain 90+ average score over 25 prompts",
        icon: "🤖",
        category: AchievementCategory::Mastery,
        rarity: AchievementRarity::Legendary,
        xp_reward: 300,
    },
];

/// Look up a definition by its stable id.
pub fn by_id(id: &str) -> Option<&'static AchievementDef> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Evaluate every not-yet-unlocked predicate for a registered profile.
///
/// `today` anchors the streak predicates. Guest exclusion happens one
/// level up — this function only ever sees registered profiles.
pub fn newly_unlocked(
    profile: &Profile,
    new_result: &PromptAnalysisResult,
    today: NaiveDate,
) -> Vec<&'static AchievementDef> {
    let combined: Vec<&PromptAnalysisResult> = profile
        .prompt_history
        .iter()
        .chain(std::iter::once(new_result))
        .collect();

    CATALOG
        .iter()
        .filter(|def| !profile.has_achievement(def.id))
        .filter(|def| satisfied(def.id, profile, new_result, &combined, today))
        .collect()
}

/// One predicate per catalog id. Thresholds live here, next to the
/// definitions they gate.
fn satisfied(
    id: &str,
    profile: &Profile,
    new_result: &PromptAnalysisResult,
    combined: &[&PromptAnalysisResult],
    today: NaiveDate,
) -> bool {
    match id {
        "first_perfect" => new_result.analysis.score == 100 && combined.len() == 1,

        "perfectionist" => combined.iter().filter(|r| r.analysis.score == 100).count() >= 5,

        "excellence_seeker" => combined.iter().filter(|r| r.analysis.score >= 90).count() >= 10,

        "daily_habit" => history::has_daily_streak(combined, 7, today),

        "week_warrior" => history::has_daily_streak(combined, 14, today),

        "month_master" => history::has_daily_streak(combined, 30, today),

        "getting_better" => history::has_improvement(combined, 20),

        "comeback_king" => {
            history::has_quality_jump(combined, PromptQuality::Poor, PromptQuality::Excellent)
        }

        "learning_curve" => history::strictly_improving(combined, 5),

        "category_explorer" => history::distinct_categories(combined) >= 6,

        "versatile_prompter" => history::categories_scoring_at_least(combined, 80) >= 4,

        "token_economist" => combined
            .iter()
            .any(|r| r.analysis.token_count <= 20 && r.analysis.score >= 85),

        "prompt_master" => combined.len() >= 100,

        // Level before the new result's XP is applied — predicates run
        // ahead of the XP step.
        "grandmaster" => profile.level >= 10,

        "ai_whisperer" => history::rolling_average_at_least(combined, 25, 90.0),

        _ => false,
    }
}
