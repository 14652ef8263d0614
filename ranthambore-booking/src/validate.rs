//! Declarative form validation.
//!
//! A form is a list of [`FieldSpec`]s checked against the current
//! [`FormValues`]. Validation always visits every field so the page can flag
//! all problems at once, and [`FieldTouch`] decides when a field's error
//! becomes visible.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE_STRICT_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").ok());
static PHONE_LENIENT_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\d{10}$").ok());
static LETTERS_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").ok());

fn matches(re: &Lazy<Option<Regex>>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

/// Values a `<select>` shows before the user picks anything.
const PLACEHOLDER_VALUES: &[&str] = &["", "select", "choose", "none", "-"];

/// Indian mobile number acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonePolicy {
    /// Ten digits starting with 6-9, the range issued to mobile numbers.
    #[default]
    Strict,
    /// Any ten digits.
    Lenient,
}

impl PhonePolicy {
    /// Spaces, dashes and a leading `+91` are dropped before matching.
    #[must_use]
    pub fn accepts(self, raw: &str) -> bool {
        let digits = normalize_phone(raw);
        match self {
            Self::Strict => matches(&PHONE_STRICT_RE, &digits),
            Self::Lenient => matches(&PHONE_LENIENT_RE, &digits),
        }
    }
}

/// Strip whitespace, dashes and an Indian country prefix from a phone number.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    compact
        .strip_prefix("+91")
        .map_or_else(|| compact.clone(), ToString::to_string)
}

#[must_use]
pub fn is_email(raw: &str) -> bool {
    matches(&EMAIL_RE, raw.trim())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRule {
    /// Non-empty after trimming.
    Required,
    /// Trimmed length of at least N characters.
    MinLength(usize),
    Email,
    Phone(PhonePolicy),
    /// A non-placeholder option chosen.
    Select,
    /// Checkbox ticked.
    Checked,
    /// Whole number within an inclusive range.
    IntRange { min: i64, max: i64 },
    /// Letters and spaces only.
    Letters,
    /// A `YYYY-MM-DD` date.
    Date,
}

impl FieldRule {
    #[must_use]
    pub fn check(self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Checked, FieldValue::Flag(checked)) => *checked,
            (Self::Checked, FieldValue::Text(_)) | (_, FieldValue::Flag(_)) => false,
            (rule, FieldValue::Text(text)) => rule.check_text(text),
        }
    }

    fn check_text(self, raw: &str) -> bool {
        let trimmed = raw.trim();
        match self {
            Self::Required => !trimmed.is_empty(),
            Self::MinLength(min) => trimmed.chars().count() >= min,
            Self::Email => is_email(trimmed),
            Self::Phone(policy) => policy.accepts(trimmed),
            Self::Select => !PLACEHOLDER_VALUES.contains(&trimmed.to_ascii_lowercase().as_str()),
            Self::IntRange { min, max } => trimmed
                .parse::<i64>()
                .is_ok_and(|value| (min..=max).contains(&value)),
            Self::Letters => matches(&LETTERS_RE, trimmed),
            Self::Date => crate::quote::parse_date(trimmed).is_ok(),
            Self::Checked => false,
        }
    }
}

/// Declared field: identifier, rules applied in order, and its error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub rules: SmallVec<[FieldRule; 3]>,
    pub message: String,
}

impl FieldSpec {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            rules: SmallVec::new(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// First rule the value breaks, if any.
    #[must_use]
    pub fn failing_rule(&self, value: &FieldValue) -> Option<FieldRule> {
        self.rules.iter().copied().find(|rule| !rule.check(value))
    }

    #[must_use]
    pub fn accepts(&self, value: &FieldValue) -> bool {
        self.failing_rule(value).is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Flag(_) => "",
        }
    }
}

/// Current form field values keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(mut self, id: &str, value: impl Into<String>) -> Self {
        self.set_text(id, value);
        self
    }

    #[must_use]
    pub fn with_flag(mut self, id: &str, checked: bool) -> Self {
        self.set_flag(id, checked);
        self
    }

    pub fn set_text(&mut self, id: &str, value: impl Into<String>) {
        self.values
            .insert(id.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, id: &str, checked: bool) {
        self.values.insert(id.to_string(), FieldValue::Flag(checked));
    }

    /// Missing fields read as empty text.
    #[must_use]
    pub fn get(&self, id: &str) -> FieldValue {
        self.values.get(id).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn text(&self, id: &str) -> &str {
        self.values.get(id).map_or("", FieldValue::as_text)
    }

    #[must_use]
    pub fn flag(&self, id: &str) -> bool {
        matches!(self.values.get(id), Some(FieldValue::Flag(true)))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub rule: FieldRule,
    pub message: String,
}

/// Outcome of validating every declared field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn error_for(&self, id: &str) -> Option<&FieldError> {
        self.errors.iter().find(|err| err.field == id)
    }

    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|err| err.message.as_str())
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|err| err.field.as_str())
    }

    /// Fold another report in, keeping every error.
    pub fn merge(&mut self, other: Self) {
        self.checked += other.checked;
        self.errors.extend(other.errors);
    }
}

/// Validate every field without short-circuiting.
#[must_use]
pub fn validate(specs: &[FieldSpec], values: &FormValues) -> ValidationReport {
    let errors = specs
        .iter()
        .filter_map(|spec| {
            spec.failing_rule(&values.get(&spec.id))
                .map(|rule| FieldError {
                    field: spec.id.clone(),
                    rule,
                    message: spec.message.clone(),
                })
        })
        .collect();
    ValidationReport {
        checked: specs.len(),
        errors,
    }
}

/// Visual state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldVisual {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldVisual {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Untouched => "",
            Self::Valid => "field--valid",
            Self::Invalid => "field--invalid",
        }
    }

    #[must_use]
    pub const fn shows_error(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

/// Tracks which fields have been judged and how.
///
/// A field is checked when it loses focus. While it is flagged invalid every
/// keystroke re-checks it, so the message clears as soon as it is fixed;
/// before that, typing never shows an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTouch {
    states: BTreeMap<String, FieldVisual>,
}

impl FieldTouch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_blur(&mut self, spec: &FieldSpec, value: &FieldValue) -> FieldVisual {
        let visual = judge(spec, value);
        self.states.insert(spec.id.clone(), visual);
        visual
    }

    pub fn on_input(&mut self, spec: &FieldSpec, value: &FieldValue) -> FieldVisual {
        match self.visual(&spec.id) {
            FieldVisual::Invalid => self.on_blur(spec, value),
            current => current,
        }
    }

    /// Blur judged by a whole-form report, for fields whose specs are built
    /// on the fly (guest names, passenger rows).
    pub fn blur_from_report(&mut self, id: &str, report: &ValidationReport) -> FieldVisual {
        let visual = if report.error_for(id).is_some() {
            FieldVisual::Invalid
        } else {
            FieldVisual::Valid
        };
        self.states.insert(id.to_string(), visual);
        visual
    }

    pub fn input_from_report(&mut self, id: &str, report: &ValidationReport) -> FieldVisual {
        match self.visual(id) {
            FieldVisual::Invalid => self.blur_from_report(id, report),
            current => current,
        }
    }

    /// Mark every field from a full validation pass, as a submit attempt does.
    ///
    /// Errors on fields outside `specs` are flagged too.
    pub fn apply(&mut self, specs: &[FieldSpec], report: &ValidationReport) {
        for spec in specs {
            let visual = if report.error_for(&spec.id).is_some() {
                FieldVisual::Invalid
            } else {
                FieldVisual::Valid
            };
            self.states.insert(spec.id.clone(), visual);
        }
        for error in &report.errors {
            self.states.insert(error.field.clone(), FieldVisual::Invalid);
        }
    }

    #[must_use]
    pub fn visual(&self, id: &str) -> FieldVisual {
        self.states.get(id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn shows_error(&self, id: &str) -> bool {
        self.visual(id).shows_error()
    }

    pub fn reset(&mut self) {
        self.states.clear();
    }
}

fn judge(spec: &FieldSpec, value: &FieldValue) -> FieldVisual {
    if spec.accepts(value) {
        FieldVisual::Valid
    } else {
        FieldVisual::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_spec() -> FieldSpec {
        FieldSpec::new("name", "Name", "Please enter your full name")
            .rule(FieldRule::Required)
            .rule(FieldRule::MinLength(3))
    }

    fn email_spec() -> FieldSpec {
        FieldSpec::new("email", "Email", "Please enter a valid email").rule(FieldRule::Email)
    }

    #[test]
    fn email_shape_is_simple() {
        assert!(is_email("guest@example.com"));
        assert!(is_email("  a@b.in "));
        assert!(!is_email("guest@example"));
        assert!(!is_email("guest example@x.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email(""));
    }

    #[test]
    fn phone_policies_differ_on_leading_digit() {
        assert!(PhonePolicy::Strict.accepts("98765 43210"));
        assert!(PhonePolicy::Strict.accepts("+91 9876543210"));
        assert!(!PhonePolicy::Strict.accepts("1234567890"));
        assert!(PhonePolicy::Lenient.accepts("1234567890"));
        assert!(!PhonePolicy::Lenient.accepts("12345"));
    }

    #[test]
    fn select_rejects_placeholders() {
        let value = |raw: &str| FieldValue::Text(raw.into());
        assert!(!FieldRule::Select.check(&value("")));
        assert!(!FieldRule::Select.check(&value("Select")));
        assert!(FieldRule::Select.check(&value("rajasthan")));
    }

    #[test]
    fn checkbox_and_range_rules() {
        assert!(FieldRule::Checked.check(&FieldValue::Flag(true)));
        assert!(!FieldRule::Checked.check(&FieldValue::Flag(false)));
        let age = FieldRule::IntRange { min: 1, max: 120 };
        assert!(age.check(&FieldValue::Text("35".into())));
        assert!(!age.check(&FieldValue::Text("0".into())));
        assert!(!age.check(&FieldValue::Text("121".into())));
        assert!(!age.check(&FieldValue::Text("abc".into())));
    }

    #[test]
    fn letters_rule_rejects_digits() {
        assert!(FieldRule::Letters.check(&FieldValue::Text("Asha Rao".into())));
        assert!(!FieldRule::Letters.check(&FieldValue::Text("R2D2".into())));
    }

    #[test]
    fn validation_reports_every_failure() {
        let specs = [name_spec(), email_spec()];
        let values = FormValues::new()
            .with_text("name", "   ")
            .with_text("email", "not-an-email");
        let report = validate(&specs, &values);
        assert!(!report.is_valid());
        assert_eq!(report.invalid_fields().collect::<Vec<_>>(), ["name", "email"]);
        assert_eq!(report.error_for("name").map(|e| e.rule), Some(FieldRule::Required));
    }

    #[test]
    fn touch_shows_errors_only_after_blur() {
        let spec = email_spec();
        let mut touch = FieldTouch::new();
        let bad = FieldValue::Text("guest@".into());
        assert_eq!(touch.on_input(&spec, &bad), FieldVisual::Untouched);
        assert_eq!(touch.on_blur(&spec, &bad), FieldVisual::Invalid);
        assert!(touch.shows_error("email"));
        let good = FieldValue::Text("guest@example.com".into());
        assert_eq!(touch.on_input(&spec, &good), FieldVisual::Valid);
        let bad_again = FieldValue::Text("guest".into());
        assert_eq!(touch.on_input(&spec, &bad_again), FieldVisual::Valid);
    }

    #[test]
    fn submit_marks_all_fields() {
        let specs = [name_spec(), email_spec()];
        let values = FormValues::new()
            .with_text("name", "Asha")
            .with_text("email", "bad");
        let report = validate(&specs, &values);
        let mut touch = FieldTouch::new();
        touch.apply(&specs, &report);
        assert_eq!(touch.visual("name"), FieldVisual::Valid);
        assert_eq!(touch.visual("email"), FieldVisual::Invalid);
        touch.reset();
        assert_eq!(touch.visual("email"), FieldVisual::Untouched);
    }

    #[test]
    fn report_driven_touch_covers_dynamic_fields() {
        let report = ValidationReport {
            checked: 2,
            errors: vec![FieldError {
                field: "guest-name-2".into(),
                rule: FieldRule::Letters,
                message: "Please enter a valid name".into(),
            }],
        };
        let mut touch = FieldTouch::new();
        assert_eq!(touch.input_from_report("guest-name-2", &report), FieldVisual::Untouched);
        assert_eq!(touch.blur_from_report("guest-name-1", &report), FieldVisual::Valid);
        touch.apply(&[name_spec()], &report);
        assert!(touch.shows_error("guest-name-2"));
        let fixed = ValidationReport {
            checked: 2,
            errors: Vec::new(),
        };
        assert_eq!(touch.input_from_report("guest-name-2", &fixed), FieldVisual::Valid);
    }
}
