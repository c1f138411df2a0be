use std::sync::Arc;

use super::flush::FlushRegistry;
use super::schema::WizardSchema;
use crate::shared::validate::FieldErrors;

/// Plain (non-reactive) wizard state: the draft record, the field error map
/// and the step cursor. The Leptos controller wraps one of these in a signal;
/// keeping the state plain keeps the whole state machine unit-testable.
#[derive(Clone)]
pub struct WizardCore<T: Clone + Default> {
    schema: Arc<WizardSchema<T>>,
    pub draft: T,
    pub errors: FieldErrors,
    step: usize,
    pub submitting: bool,
    allow_jumps: bool,
}

impl<T: Clone + Default> WizardCore<T> {
    pub fn new(schema: Arc<WizardSchema<T>>) -> Self {
        Self {
            schema,
            draft: T::default(),
            errors: FieldErrors::new(),
            step: 1,
            submitting: false,
            allow_jumps: false,
        }
    }

    /// Variant for find/claim style flows that select a target step directly.
    pub fn new_with_jumps(schema: Arc<WizardSchema<T>>) -> Self {
        let mut core = Self::new(schema);
        core.allow_jumps = true;
        core
    }

    pub fn schema(&self) -> &WizardSchema<T> {
        &self.schema
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.schema.step_count()
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.step_count()
    }

    /// Replace the draft with a record loaded for editing.
    pub fn load(&mut self, draft: T) {
        self.draft = draft;
        self.errors.clear();
        self.step = 1;
    }

    /// Mutate one field of the draft and drop that field's stale error.
    pub fn set_field(&mut self, field: &str, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.draft);
        self.errors.remove(field);
    }

    /// Advance the cursor if the current step's declared subset validates.
    /// On failure the violations land in the error map and the cursor stays.
    pub fn next(&mut self) -> bool {
        let step_errors = self.schema.step_errors(&self.draft, self.step);
        if !step_errors.is_empty() {
            self.errors.extend(step_errors);
            return false;
        }
        if self.step < self.step_count() {
            self.step += 1;
        }
        true
    }

    /// Retreat the cursor; always succeeds, floored at step 1.
    pub fn previous(&mut self) {
        self.step = self.step.saturating_sub(1).max(1);
    }

    /// Direct jump, permitted only for jump-enabled wizards and bounded to
    /// the valid step range.
    pub fn jump(&mut self, step: usize) -> bool {
        if !self.allow_jumps || step < 1 || step > self.step_count() {
            return false;
        }
        self.step = step;
        true
    }

    /// Flush + validate: the two local phases that precede any network work.
    /// Returns the record to persist, or records field violations and aborts
    /// so the caller never issues a request for an invalid draft.
    pub fn prepare_submit(&mut self, flush: &FlushRegistry<T>) -> Result<T, ()> {
        flush.run(&mut self.draft);
        let errors = self.schema.validate_record(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(());
        }
        self.errors.clear();
        Ok(self.draft.clone())
    }

    /// Completion phase: reset to defaults so the wizard can run again.
    pub fn finish_success(&mut self) {
        self.draft = T::default();
        self.errors.clear();
        self.step = 1;
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validate::{self, RuleSet};
    use crate::shared::wizard::StepDefinition;

    #[derive(Clone, Default, PartialEq, Debug)]
    struct EventDraft {
        contact_email: String,
        venue: String,
        tiers: Vec<String>,
    }

    fn schema() -> Arc<WizardSchema<EventDraft>> {
        Arc::new(WizardSchema::new(
            vec![
                StepDefinition { label: "Details", fields: &["contactEmail"] },
                StepDefinition { label: "Venue", fields: &["venue"] },
                StepDefinition { label: "Tickets", fields: &["tiers"] },
                StepDefinition { label: "Review", fields: &[] },
            ],
            RuleSet::new(vec![
                validate::email("contactEmail", "Contact email", |d: &EventDraft| {
                    &d.contact_email
                }),
                validate::required("venue", "Venue", |d: &EventDraft| &d.venue),
                validate::non_empty_list("tiers", "Add at least one tier", |d: &EventDraft| {
                    d.tiers.len()
                }),
            ]),
        ))
    }

    fn satisfied_draft() -> EventDraft {
        EventDraft {
            contact_email: "host@venue.io".into(),
            venue: "Main hall".into(),
            tiers: vec!["Regular".into()],
        }
    }

    #[test]
    fn next_is_gated_by_current_step_subset() {
        let mut core = WizardCore::new(schema());
        assert!(!core.next());
        assert_eq!(core.step(), 1);
        assert!(core.errors.contains_key("contactEmail"));

        core.set_field("contactEmail", |d| d.contact_email = "host@venue.io".into());
        assert!(core.next());
        assert_eq!(core.step(), 2);
    }

    #[test]
    fn previous_never_goes_below_one() {
        let mut core = WizardCore::new(schema());
        core.previous();
        core.previous();
        assert_eq!(core.step(), 1);
    }

    #[test]
    fn next_clamps_at_last_step() {
        let mut core = WizardCore::new(schema());
        core.load(satisfied_draft());
        for _ in 0..10 {
            core.next();
        }
        assert_eq!(core.step(), core.step_count());
    }

    #[test]
    fn set_field_clears_prior_error() {
        let mut core = WizardCore::new(schema());
        core.next();
        assert!(core.errors.contains_key("contactEmail"));
        core.set_field("contactEmail", |d| d.contact_email = "a@b.co".into());
        assert!(!core.errors.contains_key("contactEmail"));
    }

    #[test]
    fn later_steps_do_not_recheck_earlier_fields() {
        // Documented convention: only the active step's subset gates next().
        // An empty contactEmail (step 1 field) does not block steps 2..4 once
        // the user is past step 1.
        let mut core = WizardCore::new(schema());
        core.load(satisfied_draft());
        assert!(core.next()); // -> 2
        core.set_field("contactEmail", |d| d.contact_email.clear());
        assert!(core.next()); // -> 3, venue gates, passes
        assert!(core.next()); // -> 4, tiers gate, passes
        assert_eq!(core.step(), 4);
        // ...but submit still validates the whole record.
        let flush = FlushRegistry::new();
        assert!(core.prepare_submit(&flush).is_err());
        assert!(core.errors.contains_key("contactEmail"));
    }

    #[test]
    fn jumps_require_jump_mode() {
        let mut core = WizardCore::new(schema());
        assert!(!core.jump(3));
        assert_eq!(core.step(), 1);

        let mut jumping = WizardCore::new_with_jumps(schema());
        assert!(jumping.jump(3));
        assert_eq!(jumping.step(), 3);
        assert!(!jumping.jump(0));
        assert!(!jumping.jump(9));
    }

    #[test]
    fn invalid_record_aborts_submit_without_a_request() {
        // prepare_submit returning Err is the no-network guarantee: the
        // submit coordinator only persists the Ok record.
        let mut core = WizardCore::new(schema());
        let flush = FlushRegistry::new();
        assert!(core.prepare_submit(&flush).is_err());
        assert_eq!(core.errors.len(), 3);
    }

    #[test]
    fn successful_submit_resets_to_defaults() {
        let mut core = WizardCore::new(schema());
        core.load(satisfied_draft());
        core.next();
        core.next();
        let flush = FlushRegistry::new();
        let record = core.prepare_submit(&flush).unwrap();
        assert_eq!(record, satisfied_draft());

        core.finish_success();
        assert_eq!(core.step(), 1);
        assert_eq!(core.draft, EventDraft::default());
        assert!(core.errors.is_empty());
        assert!(!core.submitting);
    }

    #[test]
    fn flush_commits_pending_drafts_before_validation() {
        let mut core = WizardCore::new(schema());
        core.load(EventDraft {
            contact_email: "host@venue.io".into(),
            venue: "Main hall".into(),
            tiers: Vec::new(),
        });
        let mut flush = FlushRegistry::new();
        flush.register(|d: &mut EventDraft| d.tiers.push("VIP".into()));
        let record = core.prepare_submit(&flush).unwrap();
        assert_eq!(record.tiers, vec!["VIP".to_string()]);
    }
}
