//! Memoized activity validation read model.
//!
//! The editor asks for the validation state on every render. The engine
//! only runs again when the activity type, config or blocks differ (by
//! value) from the inputs of the previous run; any other state change reuses
//! the cached verdict. Publish eligibility and the issue count are derived
//! from the cached result on each read.

use crate::activity::{Activity, ActivityConfig, ActivityType, ContentBlock};
use crate::validation::engine::ValidationEngine;
use crate::validation::rules::{Issue, ValidationResult};

/// Run `engine` on the given inputs, or report "No activity loaded" when the
/// type or config is absent. The engine is not called in that case.
pub fn validate_activity<E: ValidationEngine + ?Sized>(
    engine: &E,
    activity_type: Option<ActivityType>,
    config: Option<&ActivityConfig>,
    blocks: &[ContentBlock],
) -> ValidationResult {
    match (activity_type, config) {
        (Some(activity_type), Some(config)) => engine.validate(activity_type, config, blocks),
        _ => ValidationResult::no_activity(),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Inputs {
    activity_type: Option<ActivityType>,
    config: Option<ActivityConfig>,
    blocks: Vec<ContentBlock>,
}

impl Inputs {
    fn matches(
        &self,
        activity_type: Option<ActivityType>,
        config: Option<&ActivityConfig>,
        blocks: &[ContentBlock],
    ) -> bool {
        self.activity_type == activity_type
            && self.config.as_ref() == config
            && self.blocks == blocks
    }
}

/// Validation state for the activity currently open in an editor session.
#[derive(Debug)]
pub struct ActivityValidation<E> {
    engine: E,
    cached: Option<(Inputs, ValidationResult)>,
}

impl<E: ValidationEngine> ActivityValidation<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            cached: None,
        }
    }

    /// Return the validation state for the given inputs, recomputing only if
    /// they changed since the last call.
    pub fn observe(
        &mut self,
        activity_type: Option<ActivityType>,
        config: Option<&ActivityConfig>,
        blocks: &[ContentBlock],
    ) -> ValidationState<'_> {
        let fresh = matches!(&self.cached, Some((inputs, _)) if inputs.matches(activity_type, config, blocks));
        if !fresh {
            self.cached = None;
        }

        let engine = &self.engine;
        let (_, result) = self.cached.get_or_insert_with(|| {
            let result = validate_activity(engine, activity_type, config, blocks);
            let inputs = Inputs {
                activity_type,
                config: config.cloned(),
                blocks: blocks.to_vec(),
            };
            (inputs, result)
        });

        ValidationState { result }
    }

    /// Convenience wrapper over [`observe`](Self::observe) for an optional
    /// loaded activity.
    pub fn observe_activity(&mut self, activity: Option<&Activity>) -> ValidationState<'_> {
        match activity {
            Some(a) => self.observe(Some(a.activity_type), Some(&a.config), &a.blocks),
            None => self.observe(None, None, &[]),
        }
    }

    /// The last computed result, if any.
    pub fn current(&self) -> Option<ValidationState<'_>> {
        self.cached
            .as_ref()
            .map(|(_, result)| ValidationState { result })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Read view over a cached [`ValidationResult`] with the derived fields.
#[derive(Debug, Clone, Copy)]
pub struct ValidationState<'a> {
    result: &'a ValidationResult,
}

impl<'a> ValidationState<'a> {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid
    }

    pub fn errors(&self) -> &'a [Issue] {
        &self.result.errors
    }

    pub fn warnings(&self) -> &'a [Issue] {
        &self.result.warnings
    }

    /// Publishing is allowed exactly when the activity is valid.
    pub fn can_publish(&self) -> bool {
        self.result.is_valid
    }

    pub fn issue_count(&self) -> usize {
        self.result.issue_count()
    }

    pub fn result(&self) -> &'a ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::json;

    use super::*;
    use crate::validation::rules::{FIELD_ACTIVITY, NO_ACTIVITY_MESSAGE};

    /// Engine stub returning a fixed result and counting calls.
    struct StubEngine {
        result: ValidationResult,
        calls: Cell<usize>,
    }

    impl StubEngine {
        fn returning(result: ValidationResult) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl ValidationEngine for StubEngine {
        fn validate(
            &self,
            _activity_type: ActivityType,
            _config: &ActivityConfig,
            _blocks: &[ContentBlock],
        ) -> ValidationResult {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn valid_with_one_warning() -> ValidationResult {
        ValidationResult {
            is_valid: true,
            errors: vec![],
            warnings: vec![Issue::warning("config.description", "missing")],
        }
    }

    fn title_config(title: &str) -> ActivityConfig {
        json!({ "title": title }).as_object().cloned().unwrap()
    }

    #[test]
    fn no_activity_type_reports_single_error_without_engine_call() {
        let mut validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));
        let config = title_config("T");

        let state = validation.observe(None, Some(&config), &[]);

        assert!(!state.is_valid());
        assert!(!state.can_publish());
        assert_eq!(state.issue_count(), 1);
        assert_eq!(state.errors()[0].field, FIELD_ACTIVITY);
        assert_eq!(state.errors()[0].message, NO_ACTIVITY_MESSAGE);
        assert!(state.warnings().is_empty());
        assert_eq!(validation.engine().calls.get(), 0);
    }

    #[test]
    fn no_config_reports_single_error() {
        let mut validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));

        let state = validation.observe(Some(ActivityType::Quiz), None, &[]);

        assert_eq!(state.issue_count(), 1);
        assert_eq!(validation.engine().calls.get(), 0);
    }

    #[test]
    fn warnings_do_not_block_publishing() {
        let mut validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));
        let config = title_config("T");

        let state = validation.observe(Some(ActivityType::Reading), Some(&config), &[]);

        assert!(state.can_publish());
        assert_eq!(state.issue_count(), 1);
    }

    #[test]
    fn unchanged_inputs_reuse_cached_result() {
        let mut validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));
        let config = title_config("T");
        let blocks = vec![ContentBlock::new("b1", "text", json!("hello"))];

        validation.observe(Some(ActivityType::Reading), Some(&config), &blocks);
        // Equal by value, different allocation.
        let same_config = title_config("T");
        let same_blocks = blocks.clone();
        validation.observe(Some(ActivityType::Reading), Some(&same_config), &same_blocks);

        assert_eq!(validation.engine().calls.get(), 1);
    }

    #[test]
    fn each_input_change_triggers_recompute() {
        let mut validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));
        let config = title_config("T");
        let blocks = vec![ContentBlock::new("b1", "text", json!("hello"))];

        validation.observe(Some(ActivityType::Reading), Some(&config), &blocks);
        validation.observe(Some(ActivityType::Video), Some(&config), &blocks);
        validation.observe(Some(ActivityType::Video), Some(&title_config("U")), &blocks);
        validation.observe(Some(ActivityType::Video), Some(&title_config("U")), &[]);

        assert_eq!(validation.engine().calls.get(), 4);
    }

    #[test]
    fn observe_activity_delegates_inputs_unmodified() {
        let seen = Cell::new(0usize);
        let engine = |t: ActivityType, c: &ActivityConfig, b: &[ContentBlock]| {
            assert_eq!(t, ActivityType::Flashcards);
            assert_eq!(c["title"], "Cards");
            seen.set(b.len());
            ValidationResult::from_issues(vec![], vec![])
        };
        let mut validation = ActivityValidation::new(engine);
        let activity = Activity {
            activity_type: ActivityType::Flashcards,
            config: title_config("Cards"),
            blocks: vec![
                ContentBlock::new("a", "card", json!({})),
                ContentBlock::new("b", "card", json!({})),
            ],
        };

        let state = validation.observe_activity(Some(&activity));

        assert!(state.is_valid());
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn current_is_empty_before_first_observe() {
        let validation = ActivityValidation::new(StubEngine::returning(valid_with_one_warning()));
        assert!(validation.current().is_none());
    }
}
