//! Progression engine. Folds scoring results into XP, levels, streaks,
//! and achievements.
//!
//! `advance` is referentially transparent given its inputs plus the
//! injected clock — no other ambient state, no side effects. Callers
//! must serialize advances per identity; each call needs to observe the
//! previous call's output.

pub mod catalog;
pub mod history;

use chrono::NaiveDate;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::model::{Identity, PromptAnalysisResult};

/// XP awarded for every analyzed prompt, before bonuses.
pub const BASE_XP: u32 = 10;

/// Cumulative XP required for each level, 1-indexed. Level saturates
/// at the table length.
pub const LEVEL_THRESHOLDS: [u32; 11] = [
    0, 100, 250, 500, 1000, 2000, 3500, 5500, 8000, 12000, 17500,
];

/// The progression engine. Owns only the clock; all state lives in the
/// identity passed through `advance`.
pub struct Progression {
    clock: Box<dyn Clock>,
}

impl Progression {
    /// Engine on the system clock.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Engine on an injected clock (fixed dates in tests).
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Fold one new result into an identity.
    ///
    /// Registered identities gain XP, level, streak, and achievements;
    /// guest identities only grow their temporary history. Returns a
    /// contract error if the result carries out-of-range values —
    /// malformed input is a caller bug, not something to clamp.
    pub fn advance(&self, identity: Identity, new_result: PromptAnalysisResult) -> Result<Identity> {
        validate(&new_result)?;

        match identity {
            Identity::Guest(mut session) => {
                // Guests never accumulate achievements or XP.
                session.temp_prompt_history.push(new_result);
                Ok(Identity::Guest(session))
            }
            Identity::Registered(mut profile) => {
                let today = self.clock.today();

                let unlocked = catalog::newly_unlocked(&profile, &new_result, today);
                let unlock_time = new_result.timestamp;

                let xp_earned = BASE_XP
                    + score_bonus(new_result.analysis.score)
                    + unlocked.iter().map(|d| d.xp_reward).sum::<u32>();

                let new_streak = next_streak(&profile, today);

                let mut result = new_result;
                result.xp_earned = xp_earned;
                result.achievements_unlocked =
                    unlocked.iter().map(|d| d.unlock(unlock_time)).collect();

                info!(
                    username = %profile.username,
                    score = result.analysis.score,
                    xp_earned,
                    unlocked = unlocked.len(),
                    streak = new_streak,
                    "progress advanced"
                );

                profile.total_xp += xp_earned;
                profile.level = calculate_level(profile.total_xp);
                profile.current_streak = new_streak;
                profile.best_streak = profile.best_streak.max(new_streak);
                profile
                    .achievements
                    .extend(result.achievements_unlocked.iter().cloned());
                profile.prompt_history.push(result);

                Ok(Identity::Registered(profile))
            }
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

/// Score bonus tiers, mutually exclusive, highest applicable only.
pub fn score_bonus(score: u8) -> u32 {
    match score {
        100 => 50,
        90..=99 => 25,
        80..=89 => 15,
        _ => 0,
    }
}

/// Highest level whose threshold is covered by `total_xp`, saturating
/// at the top of the table.
pub fn calculate_level(total_xp: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|threshold| total_xp >= *threshold)
        .map(|i| i as u32 + 1)
        .unwrap_or(1)
}

/// XP remaining until the next level, 0 at max level.
pub fn xp_for_next_level(level: u32, total_xp: u32) -> u32 {
    let next = level as usize;
    match LEVEL_THRESHOLDS.get(next) {
        Some(threshold) => threshold.saturating_sub(total_xp),
        None => 0,
    }
}

/// Streak rule: first-ever result starts at 1; same day leaves the
/// streak untouched; the next calendar day extends it; any gap resets
/// to 1.
fn next_streak(profile: &crate::model::Profile, today: NaiveDate) -> u32 {
    let last = match profile.prompt_history.last() {
        Some(entry) => entry.timestamp.date_naive(),
        None => return 1,
    };

    match (today - last).num_days() {
        0 => profile.current_streak,
        1 => profile.current_streak + 1,
        _ => 1,
    }
}

fn validate(result: &PromptAnalysisResult) -> Result<()> {
    let a = &result.analysis;
    let axes = [
        a.feedback.clarity,
        a.feedback.specificity,
        a.feedback.context,
        a.feedback.structure,
        a.feedback.length,
    ];

    if a.score > 100 || axes.iter().any(|x| *x > 100) {
        return Err(Error::Contract(format!(
            "result {} carries out-of-range scores",
            result.id
        )));
    }

    Ok(())
}
