//! Declarative validation rules for form fields
//!
//! A form is described by a static slice of [`FieldRule`]s and validated by
//! [`validate_form`]; the form type only has to expose its values through
//! [`FormFields`].

use chrono::NaiveDate;
use thiserror::Error;

/// Значение поля формы в том виде, в каком его видит валидатор
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Empty,
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    /// Text input; whitespace-only counts as empty.
    pub fn text(value: &'a str) -> Self {
        if value.trim().is_empty() {
            FieldValue::Empty
        } else {
            FieldValue::Text(value)
        }
    }

    /// Text input that is expected to hold a number.
    ///
    /// Unparseable input stays `Text` so that the numeric rule can report it.
    pub fn numeric_text(value: &'a str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        match trimmed.replace(',', ".").parse::<f64>() {
            Ok(n) if n.is_finite() => FieldValue::Number(n),
            _ => FieldValue::Text(value),
        }
    }

    pub fn optional_number(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Empty)
    }

    pub fn optional_date(value: Option<NaiveDate>) -> Self {
        value.map(FieldValue::Date).unwrap_or(FieldValue::Empty)
    }
}

/// Данные окружения, нужные пользовательским проверкам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// Custom predicate; returns the error message on failure.
pub type CustomCheck = fn(&FieldValue<'_>, &ValidationContext) -> Result<(), &'static str>;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub numeric: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub custom: Option<CustomCheck>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            numeric: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    /// Value must be a number within `[min, max]`.
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.numeric = true;
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub const fn custom(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a single value against the rules
    pub fn validate(
        &self,
        value: &FieldValue<'_>,
        field_label: &str,
        ctx: &ValidationContext,
    ) -> Result<(), String> {
        match value {
            FieldValue::Empty => {
                if self.required {
                    return Err(format!("{} обязательно для заполнения", field_label));
                }
                return Ok(());
            }
            FieldValue::Text(text) => {
                if self.numeric {
                    return Err(format!("{} должно быть числом", field_label));
                }
                self.validate_length(text, field_label)?;
            }
            FieldValue::Number(n) => self.validate_number(*n, field_label)?,
            FieldValue::Date(_) => {}
        }

        if let Some(check) = self.custom {
            check(value, ctx).map_err(|msg| msg.to_string())?;
        }

        Ok(())
    }

    fn validate_length(&self, value: &str, field_label: &str) -> Result<(), String> {
        let len = value.trim().chars().count();

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} должно содержать минимум {} символа",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} не должно превышать {} символов", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if value < min || value > max => {
                Err(format!("{} должно быть от {} до {}", field_label, min, max))
            }
            (Some(min), None) if value < min => {
                Err(format!("{} должно быть не менее {}", field_label, min))
            }
            (None, Some(max)) if value > max => {
                Err(format!("{} должно быть не более {}", field_label, max))
            }
            _ => Ok(()),
        }
    }
}

/// Правило для одного поля формы
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldRule {
    pub const fn new(field: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self {
            field,
            label,
            rules,
        }
    }
}

/// Access to form values by field name.
pub trait FormFields {
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failing fields of one form, in schema order
#[derive(Debug, Clone, PartialEq, Default, Error)]
#[error("Ошибка валидации: {}", summary(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for the given field, if it failed.
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Validate every field of `form` against `schema`, collecting the first error per field.
pub fn validate_form<F: FormFields + ?Sized>(
    form: &F,
    schema: &[FieldRule],
    ctx: &ValidationContext,
) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = schema
        .iter()
        .filter_map(|rule| {
            rule.rules
                .validate(&form.field_value(rule.field), rule.label, ctx)
                .err()
                .map(|message| FieldError {
                    field: rule.field,
                    message,
                })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Reusable custom checks
pub mod checks {
    use super::{FieldValue, ValidationContext};

    pub fn not_before_today(value: &FieldValue<'_>, ctx: &ValidationContext) -> Result<(), &'static str> {
        match value {
            FieldValue::Date(d) if *d < ctx.today => Err("Дата должна быть сегодня или позже"),
            FieldValue::Date(_) => Ok(()),
            _ => Err("Некорректная дата"),
        }
    }

    pub fn positive(value: &FieldValue<'_>, _ctx: &ValidationContext) -> Result<(), &'static str> {
        match value {
            FieldValue::Number(n) if *n > 0.0 => Ok(()),
            _ => Err("Укажите цену больше 0"),
        }
    }

    pub fn email(value: &FieldValue<'_>, _ctx: &ValidationContext) -> Result<(), &'static str> {
        match value {
            FieldValue::Text(s) => {
                let s = s.trim();
                match s.split_once('@') {
                    Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
                    _ => Err("Некорректный email"),
                }
            }
            _ => Err("Некорректный email"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        name: String,
        stars: String,
        date: Option<NaiveDate>,
    }

    impl FormFields for Form {
        fn field_value(&self, field: &str) -> FieldValue<'_> {
            match field {
                "name" => FieldValue::text(&self.name),
                "stars" => FieldValue::numeric_text(&self.stars),
                "date" => FieldValue::optional_date(self.date),
                _ => FieldValue::Empty,
            }
        }
    }

    const SCHEMA: &[FieldRule] = &[
        FieldRule::new("name", "Название", ValidationRules::required().min_length(2)),
        FieldRule::new("stars", "Категория", ValidationRules::required().range(1.0, 5.0)),
        FieldRule::new(
            "date",
            "Дата",
            ValidationRules::required().custom(checks::not_before_today),
        ),
    ];

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_valid_form_passes() {
        let form = Form {
            name: "Hilton".into(),
            stars: "4".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
        };
        assert!(validate_form(&form, SCHEMA, &ctx()).is_ok());
    }

    #[test]
    fn test_collects_one_error_per_field() {
        let form = Form {
            name: "H".into(),
            stars: "seven".into(),
            date: None,
        };
        let errors = validate_form(&form, SCHEMA, &ctx()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.for_field("name").unwrap().contains("минимум 2"));
        assert!(errors.for_field("stars").unwrap().contains("числом"));
        assert!(errors.for_field("date").unwrap().contains("обязательно"));
    }

    #[test]
    fn test_range_and_custom_checks() {
        let form = Form {
            name: "Ritz".into(),
            stars: "6".into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 31),
        };
        let errors = validate_form(&form, SCHEMA, &ctx()).unwrap_err();
        assert_eq!(errors.for_field("stars"), Some("Категория должно быть от 1 до 5"));
        assert_eq!(
            errors.for_field("date"),
            Some("Дата должна быть сегодня или позже")
        );
        assert!(errors.for_field("name").is_none());
    }

    #[test]
    fn test_optional_empty_field_skips_other_rules() {
        let rules = ValidationRules::none().min_length(3);
        assert!(rules.validate(&FieldValue::text("   "), "X", &ctx()).is_ok());
        assert!(rules.validate(&FieldValue::text("ab"), "X", &ctx()).is_err());
    }

    #[test]
    fn test_email_check() {
        let c = ctx();
        assert!(checks::email(&FieldValue::Text("a@b.ru"), &c).is_ok());
        assert!(checks::email(&FieldValue::Text("ab.ru"), &c).is_err());
        assert!(checks::email(&FieldValue::Text("@b.ru"), &c).is_err());
    }
}
