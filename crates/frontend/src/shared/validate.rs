//! Field-level validation rules shared by wizard step gating and submit.
//!
//! A rule inspects the whole draft record and reports at most one violation,
//! keyed by the field path it belongs to (`title`, `identityMetadata.bvn`,
//! `categories.0.tags`). Violations never escape as errors; they land in a
//! [`FieldErrors`] map that the form renders next to the offending input.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Field path -> human-readable violation message.
pub type FieldErrors = BTreeMap<String, String>;

/// One validation rule bound to a field path.
#[derive(Clone)]
pub struct Rule<T> {
    pub field: &'static str,
    check: Arc<dyn Fn(&T) -> Option<String> + Send + Sync>,
}

impl<T> Rule<T> {
    pub fn new(
        field: &'static str,
        check: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            check: Arc::new(check),
        }
    }

    pub fn check(&self, value: &T) -> Option<String> {
        (self.check)(value)
    }
}

/// The complete rule set for one entity draft.
#[derive(Clone)]
pub struct RuleSet<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.rules.iter().any(|r| r.field == field)
    }

    /// Run every rule; one message per violated field path.
    pub fn validate_all(&self, value: &T) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in &self.rules {
            if let Some(message) = rule.check(value) {
                errors.entry(rule.field.to_string()).or_insert(message);
            }
        }
        errors
    }

    /// Run only the rules whose field is in `fields`.
    pub fn validate_fields(&self, value: &T, fields: &[&str]) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for rule in self.rules.iter().filter(|r| fields.contains(&r.field)) {
            if let Some(message) = rule.check(value) {
                errors.entry(rule.field.to_string()).or_insert(message);
            }
        }
        errors
    }
}

// ============================================================================
// Rule constructors
// ============================================================================

/// Required non-blank text field.
pub fn required<T>(
    field: &'static str,
    label: &'static str,
    get: impl Fn(&T) -> &str + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        if get(v).trim().is_empty() {
            Some(format!("{} is required", label))
        } else {
            None
        }
    })
}

/// Required field that must look like an email address.
pub fn email<T>(
    field: &'static str,
    label: &'static str,
    get: impl Fn(&T) -> &str + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        let value = get(v).trim();
        if value.is_empty() {
            return Some(format!("{} is required", label));
        }
        if !looks_like_email(value) {
            return Some(format!("{} must be a valid email address", label));
        }
        None
    })
}

/// Required numeric field bounded to `[min, max]`.
pub fn number_in_range<T>(
    field: &'static str,
    label: &'static str,
    min: f64,
    max: f64,
    get: impl Fn(&T) -> Option<f64> + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| match get(v) {
        None => Some(format!("{} is required", label)),
        Some(n) if n < min || n > max => {
            Some(format!("{} must be between {} and {}", label, min, max))
        }
        Some(_) => None,
    })
}

/// Field that must equal another field (password confirmation).
pub fn matches_field<T>(
    field: &'static str,
    message: &'static str,
    get: impl Fn(&T) -> &str + Send + Sync + 'static,
    get_other: impl Fn(&T) -> &str + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        if get(v) != get_other(v) {
            Some(message.to_string())
        } else {
            None
        }
    })
}

/// Text field with a minimum length (passwords).
pub fn min_len<T>(
    field: &'static str,
    label: &'static str,
    min: usize,
    get: impl Fn(&T) -> &str + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        if get(v).chars().count() < min {
            Some(format!("{} must be at least {} characters", label, min))
        } else {
            None
        }
    })
}

/// List field that must contain at least one entry.
pub fn non_empty_list<T>(
    field: &'static str,
    message: &'static str,
    len: impl Fn(&T) -> usize + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        if len(v) == 0 {
            Some(message.to_string())
        } else {
            None
        }
    })
}

/// Required field that must contain only digits, with an exact length.
pub fn digits_exact<T>(
    field: &'static str,
    label: &'static str,
    count: usize,
    get: impl Fn(&T) -> &str + Send + Sync + 'static,
) -> Rule<T> {
    Rule::new(field, move |v| {
        let value = get(v).trim();
        if value.is_empty() {
            return Some(format!("{} is required", label));
        }
        let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
        if digits != count || digits != value.chars().count() {
            return Some(format!("{} must be exactly {} digits", label, count));
        }
        None
    })
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Draft {
        name: String,
        email: String,
        password: String,
        confirm: String,
        percent: Option<f64>,
        tags: Vec<String>,
    }

    fn draft() -> Draft {
        Draft {
            name: "Ada's Kitchen".into(),
            email: "ada@example.com".into(),
            password: "abcdefgh".into(),
            confirm: "abcdefgh".into(),
            percent: Some(25.0),
            tags: vec!["lunch".into()],
        }
    }

    fn rules() -> RuleSet<Draft> {
        RuleSet::new(vec![
            required("name", "Name", |d: &Draft| &d.name),
            email("email", "Email", |d: &Draft| &d.email),
            min_len("password", "Password", 8, |d: &Draft| &d.password),
            matches_field(
                "confirmPassword",
                "Passwords do not match",
                |d: &Draft| &d.confirm,
                |d: &Draft| &d.password,
            ),
            number_in_range("percent", "Discount", 0.0, 100.0, |d: &Draft| d.percent),
            non_empty_list("tags", "Add at least one tag", |d: &Draft| d.tags.len()),
        ])
    }

    #[test]
    fn valid_draft_produces_no_errors() {
        assert!(rules().validate_all(&draft()).is_empty());
    }

    #[test]
    fn violations_are_keyed_by_field_path() {
        let mut d = draft();
        d.name = "   ".into();
        d.percent = Some(150.0);
        let errors = rules().validate_all(&d);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("name"));
        assert_eq!(
            errors.get("percent").unwrap(),
            "Discount must be between 0 and 100"
        );
    }

    #[test]
    fn subset_validation_ignores_other_fields() {
        let mut d = draft();
        d.email = "not-an-email".into();
        let errors = rules().validate_fields(&d, &["name", "percent"]);
        assert!(errors.is_empty());
    }

    #[test]
    fn password_mismatch_lands_on_confirm_field() {
        let mut d = draft();
        d.password = "abcdefgh".into();
        d.confirm = "abcdefgi".into();
        let errors = rules().validate_all(&d);
        assert_eq!(errors.get("confirmPassword").unwrap(), "Passwords do not match");
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a.b.co"));
    }
}
