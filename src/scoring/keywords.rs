//! Fixed keyword tables for classification and quality heuristics.
//!
//! Process-wide constants. Matching is case-insensitive substring
//! unless a pattern in `extractors` says otherwise.

use crate::model::PromptCategory;

pub const TECHNICAL: &[&str] = &[
    "code",
    "function",
    "algorithm",
    "debug",
    "implement",
    "optimize",
    "refactor",
    "api",
    "database",
    "framework",
];

pub const CREATIVE: &[&str] = &[
    "story",
    "creative",
    "imagine",
    "design",
    "artistic",
    "innovative",
    "brainstorm",
    "concept",
    "vision",
];

pub const ANALYTICAL: &[&str] = &[
    "analyze",
    "compare",
    "evaluate",
    "research",
    "study",
    "examine",
    "investigate",
    "assess",
];

pub const CONVERSATIONAL: &[&str] = &[
    "explain",
    "discuss",
    "tell",
    "chat",
    "talk",
    "conversation",
    "dialogue",
];

pub const INSTRUCTIONAL: &[&str] = &[
    "how",
    "step",
    "guide",
    "tutorial",
    "teach",
    "learn",
    "instructions",
    "process",
];

pub const CODING: &[&str] = &[
    "javascript",
    "python",
    "react",
    "html",
    "css",
    "programming",
    "syntax",
    "variable",
    "class",
    "method",
];

/// Category keyword sets in tie-break priority order.
pub const CATEGORY_KEYWORDS: [(PromptCategory, &[&str]); 6] = [
    (PromptCategory::Technical, TECHNICAL),
    (PromptCategory::Creative, CREATIVE),
    (PromptCategory::Analytical, ANALYTICAL),
    (PromptCategory::Conversational, CONVERSATIONAL),
    (PromptCategory::Instructional, INSTRUCTIONAL),
    (PromptCategory::Coding, CODING),
];

/// Words that signal a deliberate, well-specified request.
pub const POSITIVE_INDICATORS: &[&str] = &[
    "specific",
    "detailed",
    "clear",
    "precise",
    "context",
    "example",
    "format",
    "tone",
    "audience",
    "goal",
    "constraint",
    "requirement",
    "criteria",
];

/// Words that signal vagueness.
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "anything",
    "something",
    "stuff",
    "things",
    "whatever",
    "maybe",
    "possibly",
    "kinda",
    "sorta",
    "idk",
    "dunno",
    "just",
    "simply",
];
