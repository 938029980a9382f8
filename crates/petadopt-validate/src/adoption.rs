use petadopt_model::{CompletionField, CompletionForm, FieldError, FieldErrors};

use crate::Validate;
use crate::rules::ValidationRules;

impl Validate for CompletionForm {
    type Field = CompletionField;

    fn validate(&self, _rules: &ValidationRules) -> FieldErrors<CompletionField> {
        let mut errors = FieldErrors::new();
        if self.date_received.trim().is_empty() {
            errors.insert(
                CompletionField::DateReceived,
                FieldError::required("Date pet was received is required."),
            );
        }
        if self.receipt_location.trim().is_empty() {
            errors.insert(
                CompletionField::ReceiptLocation,
                FieldError::required("Receipt location / address is required."),
            );
        }
        if self.condition.is_none() {
            errors.insert(
                CompletionField::Condition,
                FieldError::required("Pet condition is required."),
            );
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petadopt_model::PetCondition;

    #[test]
    fn test_all_three_required() {
        let errors = CompletionForm::default().validate(&ValidationRules::default());
        assert_eq!(errors.len(), 3);

        let form = CompletionForm {
            date_received: "2024-05-01".to_string(),
            receipt_location: "Ikeja, Lagos".to_string(),
            condition: Some(PetCondition::Good),
        };
        assert!(form.validate(&ValidationRules::default()).is_empty());
    }
}
