use serde::{Deserialize, Serialize};

use crate::shared::validation::{
    checks, validate_form, FieldRule, FieldValue, FormFields, ValidationContext, ValidationErrors,
    ValidationRules,
};

/// Сообщение в службу поддержки (`POST /api/send-message`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportMessageDto {
    pub email: String,
    pub message: String,
}

pub const SUPPORT_FORM_RULES: &[FieldRule] = &[
    FieldRule::new(
        "email",
        "Email",
        ValidationRules::required().custom(checks::email),
    ),
    FieldRule::new("message", "Сообщение", ValidationRules::required()),
];

impl FormFields for SupportMessageDto {
    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match field {
            "email" => FieldValue::text(&self.email),
            "message" => FieldValue::text(&self.message),
            _ => FieldValue::Empty,
        }
    }
}

impl SupportMessageDto {
    pub fn validate(&self, ctx: &ValidationContext) -> Result<(), ValidationErrors> {
        validate_form(self, SUPPORT_FORM_RULES, ctx)
    }
}
