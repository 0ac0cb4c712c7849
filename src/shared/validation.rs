//! Validation Utilities

use validator::ValidationErrors;

use super::error::AppError;

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e.message.clone().map(|m| m.to_string()).unwrap_or_default();
                format!("{}: {}", field, detail)
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn test_first_field_error_becomes_message() {
        let probe = Probe {
            email: "not-an-email".into(),
        };
        let err = validation_error(probe.validate().unwrap_err());

        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "email: Invalid email format");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
