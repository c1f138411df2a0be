use crate::shared::validate::{FieldErrors, RuleSet};

/// One wizard step: a label and the subset of fields it gates on.
#[derive(Clone, Copy, Debug)]
pub struct StepDefinition {
    pub label: &'static str,
    pub fields: &'static [&'static str],
}

/// Step layout plus the full rule set for one entity draft.
pub struct WizardSchema<T> {
    steps: Vec<StepDefinition>,
    rules: RuleSet<T>,
}

impl<T> WizardSchema<T> {
    /// Builds the schema. Every field a step declares must carry a rule in
    /// the rule set; a record field without a rule cannot be gated or
    /// surfaced, so that mismatch is a programming error caught here.
    pub fn new(steps: Vec<StepDefinition>, rules: RuleSet<T>) -> Self {
        assert!(!steps.is_empty(), "wizard needs at least one step");
        for step in &steps {
            for field in step.fields {
                assert!(
                    rules.has_field(field),
                    "step '{}' declares field '{}' with no validator rule",
                    step.label,
                    field
                );
            }
        }
        Self { steps, rules }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// 1-based step lookup.
    pub fn step(&self, index: usize) -> &StepDefinition {
        &self.steps[index - 1]
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Violations for one step's declared subset.
    ///
    /// The final step always passes: Submit re-validates the whole record,
    /// so forward navigation out of the last step never happens and its
    /// fields are checked there instead. Deliberate convention, not a gap.
    pub fn step_errors(&self, draft: &T, index: usize) -> FieldErrors {
        if index >= self.step_count() {
            return FieldErrors::new();
        }
        self.rules.validate_fields(draft, self.step(index).fields)
    }

    pub fn step_satisfied(&self, draft: &T, index: usize) -> bool {
        self.step_errors(draft, index).is_empty()
    }

    /// Whole-record validation used by the submit phase.
    pub fn validate_record(&self, draft: &T) -> FieldErrors {
        self.rules.validate_all(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validate::{self, RuleSet};

    #[derive(Clone, Default)]
    struct Draft {
        name: String,
        email: String,
    }

    fn schema() -> WizardSchema<Draft> {
        WizardSchema::new(
            vec![
                StepDefinition { label: "Name", fields: &["name"] },
                StepDefinition { label: "Contact", fields: &["email"] },
                StepDefinition { label: "Review", fields: &[] },
            ],
            RuleSet::new(vec![
                validate::required("name", "Name", |d: &Draft| &d.name),
                validate::email("email", "Email", |d: &Draft| &d.email),
            ]),
        )
    }

    #[test]
    fn step_checks_only_its_subset() {
        let draft = Draft { name: "ok".into(), email: String::new() };
        let s = schema();
        assert!(s.step_satisfied(&draft, 1));
        assert!(!s.step_satisfied(&draft, 2));
    }

    #[test]
    fn final_step_is_trivially_satisfied() {
        // Every field is invalid, but the last step never gates forward
        // navigation; submit validates the whole record instead.
        assert!(schema().step_satisfied(&Draft::default(), 3));
    }

    #[test]
    fn whole_record_validation_covers_everything() {
        let errors = schema().validate_record(&Draft::default());
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
    }

    #[test]
    #[should_panic(expected = "no validator rule")]
    fn unknown_step_field_is_rejected_at_construction() {
        WizardSchema::new(
            vec![StepDefinition { label: "Bad", fields: &["missing"] }],
            RuleSet::<Draft>::new(vec![]),
        );
    }
}
