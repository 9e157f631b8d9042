//! Ticket field validation shared by the forms and the CLI

use std::fmt;

use crate::tui::components::FormField;
use crate::types::TicketFields;

/// A rejected field and the reason shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for FieldError {}

pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Trim the fields and check them.
    ///
    /// A ticket needs a name. Origin and issue may be left empty.
    pub fn validate(fields: &TicketFields) -> Result<TicketFields, FieldError> {
        let fields = fields.trimmed();
        if fields.name.is_empty() {
            return Err(FieldError {
                field: FormField::Name,
                message: "Name cannot be empty",
            });
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_come_back_trimmed() {
        let fields = TicketFields::new(" Chips ", "Room 4 ", "\tSpicy");
        assert_eq!(
            TicketFormValidator::validate(&fields),
            Ok(TicketFields::new("Chips", "Room 4", "Spicy"))
        );
    }

    #[test]
    fn test_blank_name_points_at_name_field() {
        for name in ["", "   "] {
            let err = TicketFormValidator::validate(&TicketFields::new(name, "Room 4", "Spicy"))
                .unwrap_err();
            assert_eq!(err.field, FormField::Name);
            assert_eq!(err.to_string(), "Name cannot be empty");
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        assert!(TicketFormValidator::validate(&TicketFields::new("Gum", "", "")).is_ok());
    }
}
