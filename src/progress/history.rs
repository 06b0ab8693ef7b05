//! History-scanning predicates.
//!
//! Independent pure functions over an ordered history snapshot. Kept
//! separate from the catalog so each rule is auditable and testable in
//! isolation.

use chrono::{Days, NaiveDate};
use std::collections::{HashMap, HashSet};

use crate::model::{PromptAnalysisResult, PromptCategory, PromptQuality};

/// At least one result on each of the `required_days` calendar days
/// ending today. Scans backward day by day and stops at the first gap.
pub fn has_daily_streak(
    results: &[&PromptAnalysisResult],
    required_days: u32,
    today: NaiveDate,
) -> bool {
    if results.len() < required_days as usize {
        return false;
    }

    let days: HashSet<NaiveDate> = results.iter().map(|r| r.timestamp.date_naive()).collect();

    for offset in 0..required_days {
        let target = match today.checked_sub_days(Days::new(u64::from(offset))) {
            Some(d) => d,
            None => return false,
        };
        if !days.contains(&target) {
            return false;
        }
    }

    true
}

/// Any chronologically adjacent pair improving by at least `min_gain`.
pub fn has_improvement(results: &[&PromptAnalysisResult], min_gain: i32) -> bool {
    results.windows(2).any(|pair| {
        i32::from(pair[1].analysis.score) - i32::from(pair[0].analysis.score) >= min_gain
    })
}

/// Any adjacent pair transitioning `from` → `to` in quality tier.
pub fn has_quality_jump(
    results: &[&PromptAnalysisResult],
    from: PromptQuality,
    to: PromptQuality,
) -> bool {
    results
        .windows(2)
        .any(|pair| pair[0].analysis.quality == from && pair[1].analysis.quality == to)
}

/// Strictly increasing score over the most recent `window` entries.
/// False when fewer than `window` entries exist.
pub fn strictly_improving(results: &[&PromptAnalysisResult], window: usize) -> bool {
    if results.len() < window {
        return false;
    }

    let recent = &results[results.len() - window..];
    recent
        .windows(2)
        .all(|pair| pair[1].analysis.score > pair[0].analysis.score)
}

/// Number of distinct categories present in the history.
pub fn distinct_categories(results: &[&PromptAnalysisResult]) -> usize {
    results
        .iter()
        .map(|r| r.analysis.category)
        .collect::<HashSet<_>>()
        .len()
}

/// Number of categories containing at least one score ≥ `min_score`.
pub fn categories_scoring_at_least(results: &[&PromptAnalysisResult], min_score: u8) -> usize {
    let mut best: HashMap<PromptCategory, u8> = HashMap::new();
    for r in results {
        let entry = best.entry(r.analysis.category).or_insert(0);
        *entry = (*entry).max(r.analysis.score);
    }
    best.values().filter(|s| **s >= min_score).count()
}

/// Average score over the most recent `count` entries is at least
/// `min_average`. False when fewer than `count` entries exist.
pub fn rolling_average_at_least(
    results: &[&PromptAnalysisResult],
    count: usize,
    min_average: f64,
) -> bool {
    if results.len() < count {
        return false;
    }

    let recent = &results[results.len() - count..];
    let sum: u32 = recent.iter().map(|r| u32::from(r.analysis.score)).sum();
    sum as f64 / count as f64 >= min_average
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Feedback, PromptAnalysis, ResultId};
    use chrono::{Datelike, TimeZone, Utc};

    fn result(score: u8, category: PromptCategory, day: u32) -> PromptAnalysisResult {
        PromptAnalysisResult {
            id: ResultId::new(),
            prompt: "test".to_string(),
            analysis: PromptAnalysis {
                score,
                token_count: 10,
                is_near_limit: false,
                is_at_limit: false,
                feedback: Feedback {
                    clarity: score,
                    specificity: score,
                    context: score,
                    structure: score,
                    length: score,
                },
                suggestions: vec![],
                category,
                quality: PromptQuality::from_score(score),
            },
            timestamp: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            xp_earned: 0,
            achievements_unlocked: vec![],
        }
    }

    #[test]
    fn streak_requires_every_day_present() {
        let owned: Vec<_> = (1..=7)
            .map(|d| result(70, PromptCategory::Creative, d))
            .collect();
        let results: Vec<_> = owned.iter().collect();
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();

        assert!(has_daily_streak(&results, 7, today));
        // A gap on day 4 breaks it.
        let gapped: Vec<_> = owned.iter().filter(|r| r.timestamp.day() != 4).collect();
        assert!(!has_daily_streak(&gapped, 7, today));
    }

    #[test]
    fn streak_false_with_too_few_results() {
        let owned = vec![result(70, PromptCategory::Creative, 1)];
        let results: Vec<_> = owned.iter().collect();
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert!(!has_daily_streak(&results, 7, today));
    }

    #[test]
    fn improvement_is_adjacent_only() {
        let owned = vec![
            result(40, PromptCategory::Creative, 1),
            result(55, PromptCategory::Creative, 2),
            result(70, PromptCategory::Creative, 3),
        ];
        let results: Vec<_> = owned.iter().collect();
        // 40→55 and 55→70 are each 15; 40→70 is not adjacent.
        assert!(!has_improvement(&results, 20));
        assert!(has_improvement(&results, 15));
    }

    #[test]
    fn strictly_improving_window() {
        let owned: Vec<_> = [50u8, 55, 60, 65, 70]
            .iter()
            .map(|s| result(*s, PromptCategory::Creative, 1))
            .collect();
        let results: Vec<_> = owned.iter().collect();
        assert!(strictly_improving(&results, 5));

        let owned_flat: Vec<_> = [50u8, 55, 55, 65, 70]
            .iter()
            .map(|s| result(*s, PromptCategory::Creative, 1))
            .collect();
        let flat: Vec<_> = owned_flat.iter().collect();
        assert!(!strictly_improving(&flat, 5));
    }

    #[test]
    fn category_mastery_counts_categories_not_results() {
        let owned = vec![
            result(85, PromptCategory::Creative, 1),
            result(90, PromptCategory::Creative, 2),
            result(82, PromptCategory::Technical, 3),
            result(10, PromptCategory::Coding, 4),
        ];
        let results: Vec<_> = owned.iter().collect();
        assert_eq!(categories_scoring_at_least(&results, 80), 2);
    }

    #[test]
    fn rolling_average_requires_full_window() {
        let owned: Vec<_> = (0..24)
            .map(|_| result(95, PromptCategory::Creative, 1))
            .collect();
        let results: Vec<_> = owned.iter().collect();
        assert!(!rolling_average_at_least(&results, 25, 90.0));
    }
}
