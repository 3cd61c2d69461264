//! Validation engine seam and the default rule set.
//!
//! [`ValidationEngine`] is what the read model calls; anything that can turn
//! an activity into a [`ValidationResult`] plugs in there. [`RuleEngine`] is
//! the built-in implementation covering the shipped activity types.

use serde_json::Value;

use crate::activity::{ActivityConfig, ActivityType, ContentBlock};
use crate::validation::rules::{Issue, ValidationResult};

/// Marker that denotes a blank in fill-in-the-blank text.
pub const BLANK_MARKER: &str = "___";

/// Minimum number of answer options for a quiz question.
pub const MIN_QUIZ_OPTIONS: usize = 2;

/// Minimum number of pairs in a matching activity.
pub const MIN_MATCHING_PAIRS: usize = 2;

/// Checks an activity and reports errors and warnings.
pub trait ValidationEngine {
    fn validate(
        &self,
        activity_type: ActivityType,
        config: &ActivityConfig,
        blocks: &[ContentBlock],
    ) -> ValidationResult;
}

impl<F> ValidationEngine for F
where
    F: Fn(ActivityType, &ActivityConfig, &[ContentBlock]) -> ValidationResult,
{
    fn validate(
        &self,
        activity_type: ActivityType,
        config: &ActivityConfig,
        blocks: &[ContentBlock],
    ) -> ValidationResult {
        self(activity_type, config, blocks)
    }
}

/// Default rule-based engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl ValidationEngine for RuleEngine {
    fn validate(
        &self,
        activity_type: ActivityType,
        config: &ActivityConfig,
        blocks: &[ContentBlock],
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if blank_config_field(config, "title") {
            errors.push(Issue::error("config.title", "Title is required"));
        }
        if blank_config_field(config, "description") {
            warnings.push(Issue::warning(
                "config.description",
                "Adding a description helps learners",
            ));
        }
        if blocks.is_empty() {
            errors.push(Issue::error("blocks", "Activity has no content blocks"));
        }

        match activity_type {
            ActivityType::Quiz => check_quiz(blocks, &mut errors, &mut warnings),
            ActivityType::Flashcards => check_flashcards(blocks, &mut errors),
            ActivityType::FillInBlank => check_fill_in_blank(blocks, &mut errors),
            ActivityType::Matching => check_matching(blocks, &mut errors),
            ActivityType::Video => {
                if !config.contains_key("duration") {
                    warnings.push(Issue::warning(
                        "config.duration",
                        "Video duration is not set",
                    ));
                }
            }
            ActivityType::Reading => {}
        }

        ValidationResult::from_issues(errors, warnings)
    }
}

fn blank_config_field(config: &ActivityConfig, key: &str) -> bool {
    !matches!(config.get(key), Some(Value::String(s)) if !s.trim().is_empty())
}

fn block_field(index: usize) -> String {
    format!("blocks[{index}]")
}

fn check_quiz(blocks: &[ContentBlock], errors: &mut Vec<Issue>, warnings: &mut Vec<Issue>) {
    for (i, block) in blocks.iter().enumerate() {
        if block.block_type != "question" {
            continue;
        }
        if block.text_field("question").is_none() {
            errors.push(Issue::error(block_field(i), "Question text is required"));
        }
        let options = block
            .content
            .get("options")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if options.len() < MIN_QUIZ_OPTIONS {
            errors.push(Issue::error(
                block_field(i),
                format!("A question needs at least {MIN_QUIZ_OPTIONS} options"),
            ));
        } else if !options
            .iter()
            .any(|o| o.get("correct").and_then(Value::as_bool) == Some(true))
        {
            warnings.push(Issue::warning(
                block_field(i),
                "No option is marked as correct",
            ));
        }
    }
}

fn check_flashcards(blocks: &[ContentBlock], errors: &mut Vec<Issue>) {
    for (i, block) in blocks.iter().enumerate() {
        if block.block_type != "card" {
            continue;
        }
        if block.text_field("front").is_none() || block.text_field("back").is_none() {
            errors.push(Issue::error(
                block_field(i),
                "Both sides of a card need text",
            ));
        }
    }
}

fn check_fill_in_blank(blocks: &[ContentBlock], errors: &mut Vec<Issue>) {
    for (i, block) in blocks.iter().enumerate() {
        if block.block_type != "text" {
            continue;
        }
        let has_blank = match &block.content {
            Value::String(s) => s.contains(BLANK_MARKER),
            other => other
                .get("text")
                .and_then(Value::as_str)
                .is_some_and(|s| s.contains(BLANK_MARKER)),
        };
        if !has_blank {
            errors.push(Issue::error(
                block_field(i),
                format!("Text must contain at least one blank ({BLANK_MARKER})"),
            ));
        }
    }
}

fn check_matching(blocks: &[ContentBlock], errors: &mut Vec<Issue>) {
    let pairs = blocks.iter().filter(|b| b.block_type == "pair").count();
    if pairs < MIN_MATCHING_PAIRS {
        errors.push(Issue::error(
            "blocks",
            format!("Matching needs at least {MIN_MATCHING_PAIRS} pairs"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validation::rules::ValidationSeverity;

    fn config(value: Value) -> ActivityConfig {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn complete_quiz_is_valid() {
        let blocks = vec![ContentBlock::new(
            "q1",
            "question",
            json!({
                "question": "2 + 2?",
                "options": [{ "text": "4", "correct": true }, { "text": "5" }]
            }),
        )];
        let result = RuleEngine.validate(
            ActivityType::Quiz,
            &config(json!({ "title": "Sums", "description": "Addition" })),
            &blocks,
        );

        assert!(result.is_valid);
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn missing_title_and_blocks_are_errors() {
        let result = RuleEngine.validate(ActivityType::Reading, &config(json!({})), &[]);

        assert!(!result.is_valid);
        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["config.title", "blocks"]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].severity, ValidationSeverity::Warning);
    }

    #[test]
    fn quiz_without_correct_option_only_warns() {
        let blocks = vec![ContentBlock::new(
            "q1",
            "question",
            json!({ "question": "Pick", "options": [{ "text": "a" }, { "text": "b" }] }),
        )];
        let result = RuleEngine.validate(
            ActivityType::Quiz,
            &config(json!({ "title": "T", "description": "D" })),
            &blocks,
        );

        assert!(result.is_valid);
        assert_eq!(result.warnings[0].field, "blocks[0]");
    }

    #[test]
    fn quiz_with_single_option_is_error() {
        let blocks = vec![ContentBlock::new(
            "q1",
            "question",
            json!({ "question": "Pick", "options": [{ "text": "a", "correct": true }] }),
        )];
        let result = RuleEngine.validate(
            ActivityType::Quiz,
            &config(json!({ "title": "T", "description": "D" })),
            &blocks,
        );

        assert!(!result.is_valid);
        assert_eq!(result.errors[0].field, "blocks[0]");
    }

    #[test]
    fn fill_in_blank_requires_marker() {
        let cfg = config(json!({ "title": "T", "description": "D" }));
        let with = vec![ContentBlock::new("b", "text", json!("The sky is ___."))];
        let without = vec![ContentBlock::new("b", "text", json!({ "text": "The sky is blue." }))];

        assert!(RuleEngine.validate(ActivityType::FillInBlank, &cfg, &with).is_valid);
        assert!(!RuleEngine.validate(ActivityType::FillInBlank, &cfg, &without).is_valid);
    }

    #[test]
    fn flashcard_needs_both_sides() {
        let cfg = config(json!({ "title": "T", "description": "D" }));
        let blocks = vec![ContentBlock::new("c", "card", json!({ "front": "hola" }))];

        let result = RuleEngine.validate(ActivityType::Flashcards, &cfg, &blocks);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn matching_needs_two_pairs() {
        let cfg = config(json!({ "title": "T", "description": "D" }));
        let blocks = vec![ContentBlock::new("p", "pair", json!({ "left": "a", "right": "b" }))];

        let result = RuleEngine.validate(ActivityType::Matching, &cfg, &blocks);
        assert!(!result.is_valid);
        assert_eq!(result.errors[0].field, "blocks");
    }

    #[test]
    fn closures_are_engines() {
        let engine = |_: ActivityType, _: &ActivityConfig, _: &[ContentBlock]| {
            ValidationResult::from_issues(vec![], vec![])
        };
        assert!(engine.validate(ActivityType::Video, &ActivityConfig::new(), &[]).is_valid);
    }
}
