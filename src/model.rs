//! Core data model.
//!
//! An analysis is what the scoring engine says about one prompt; a
//! result wraps an analysis with identity and timing so the progression
//! engine can fold it into history. Identities come in two shapes:
//! registered (full bookkeeping) and guest (history only).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Prompt Analysis
// ---------------------------------------------------------------------------

/// Everything the scoring engine derives from one prompt.
///
/// Immutable once produced; a pure function of the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Weighted composite score in [0, 100].
    pub score: u8,

    /// Estimated token count (word/char approximation, not a tokenizer).
    pub token_count: u32,

    /// True when the estimate exceeds 80% of the reference token limit.
    pub is_near_limit: bool,

    /// True when the estimate exceeds 95% of the reference token limit.
    pub is_at_limit: bool,

    /// The five heuristic sub-scores.
    pub feedback: Feedback,

    /// At most four improvement suggestions, in evaluation order.
    pub suggestions: Vec<String>,

    pub category: PromptCategory,
    pub quality: PromptQuality,
}

/// The five independent 0–100 heuristic axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub clarity: u8,
    pub specificity: u8,
    pub context: u8,
    pub structure: u8,
    pub length: u8,
}

/// Prompt category, decided by keyword hits.
///
/// Declaration order doubles as the tie-break priority when two
/// categories reach the same hit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptCategory {
    Technical,
    Creative,
    Analytical,
    Conversational,
    Instructional,
    Coding,
}

impl PromptCategory {
    pub const ALL: [PromptCategory; 6] = [
        PromptCategory::Technical,
        PromptCategory::Creative,
        PromptCategory::Analytical,
        PromptCategory::Conversational,
        PromptCategory::Instructional,
        PromptCategory::Coding,
    ];
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PromptCategory::Technical => "technical",
            PromptCategory::Creative => "creative",
            PromptCategory::Analytical => "analytical",
            PromptCategory::Conversational => "conversational",
            PromptCategory::Instructional => "instructional",
            PromptCategory::Coding => "coding",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PromptCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "technical" => Ok(PromptCategory::Technical),
            "creative" => Ok(PromptCategory::Creative),
            "analytical" => Ok(PromptCategory::Analytical),
            "conversational" => Ok(PromptCategory::Conversational),
            "instructional" => Ok(PromptCategory::Instructional),
            "coding" => Ok(PromptCategory::Coding),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

/// Coarse banding of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptQuality {
    Poor,
    Fair,
    Good,
    Excellent,
    Perfect,
}

impl PromptQuality {
    /// Pure score → tier mapping. Same score always yields the same tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => PromptQuality::Perfect,
            80..=89 => PromptQuality::Excellent,
            65..=79 => PromptQuality::Good,
            45..=64 => PromptQuality::Fair,
            _ => PromptQuality::Poor,
        }
    }
}

impl std::fmt::Display for PromptQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PromptQuality::Poor => "poor",
            PromptQuality::Fair => "fair",
            PromptQuality::Good => "good",
            PromptQuality::Excellent => "excellent",
            PromptQuality::Perfect => "perfect",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Analysis Result
// ---------------------------------------------------------------------------

/// Newtype for result IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub Uuid);

impl ResultId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short display: first 8 chars of UUID
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl Default for ResultId {
    fn default() -> Self {
        Self::new()
    }
}

/// One scored prompt as it lives in an identity's history.
///
/// Created once and appended; `xp_earned` and `achievements_unlocked`
/// are filled in by the progression engine when the result is folded in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAnalysisResult {
    pub id: ResultId,

    /// Trimmed source text.
    pub prompt: String,

    pub analysis: PromptAnalysis,

    pub timestamp: DateTime<Utc>,

    /// XP awarded for this result, including achievement rewards.
    pub xp_earned: u32,

    /// Achievements this result unlocked.
    pub achievements_unlocked: Vec<Achievement>,
}

impl PromptAnalysisResult {
    pub fn new(prompt: impl Into<String>, analysis: PromptAnalysis, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: ResultId::new(),
            prompt: prompt.into().trim().to_string(),
            analysis,
            timestamp,
            xp_earned: 0,
            achievements_unlocked: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Quality,
    Consistency,
    Improvement,
    Exploration,
    Mastery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl std::fmt::Display for AchievementRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AchievementRarity::Common => "common",
            AchievementRarity::Rare => "rare",
            AchievementRarity::Epic => "epic",
            AchievementRarity::Legendary => "legendary",
        };
        write!(f, "{s}")
    }
}

/// An unlocked achievement as carried on an identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable key into the catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub rarity: AchievementRarity,
    pub xp_reward: u32,
    pub unlocked_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// An identity known to the progression engine.
///
/// The guest variant carries no XP, level, streak, or achievement
/// fields at all — exclusion from bookkeeping is enforced by the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Identity {
    Registered(Profile),
    Guest(GuestSession),
}

/// A registered account with full progression state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub total_xp: u32,
    /// Pure function of `total_xp`; recomputed on every advance.
    pub level: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Unlocked achievements, unique by id, never revoked.
    pub achievements: Vec<Achievement>,
    /// Append-only, chronological.
    pub prompt_history: Vec<PromptAnalysisResult>,
}

impl Profile {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            created_at: Utc::now(),
            total_xp: 0,
            level: 1,
            current_streak: 0,
            best_streak: 0,
            achievements: Vec::new(),
            prompt_history: Vec::new(),
        }
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}

/// An ephemeral, unauthenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestSession {
    pub session_id: Uuid,
    pub temp_prompt_history: Vec<PromptAnalysisResult>,
}

impl GuestSession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            temp_prompt_history: Vec::new(),
        }
    }

    /// Fold this session's history into a freshly registered profile.
    pub fn migrate_into(self, mut profile: Profile) -> Profile {
        profile.prompt_history.extend(self.temp_prompt_history);
        profile
    }
}

impl Default for GuestSession {
    fn default() -> Self {
        Self::new()
    }
}
