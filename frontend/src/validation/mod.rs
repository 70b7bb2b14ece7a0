//! Form field validation and input masking.
//!
//! Pure checks for the Brazilian document and phone formats the portal
//! handles, plus the progressive masks applied to input fields. The
//! `validate_*` functions adapt these checks to `validator` derive
//! attributes on form structs.

pub mod document;
pub mod masks;
pub mod phone;

pub use document::is_valid_cpf;
pub use masks::{mask_cpf, mask_phone};
pub use phone::{PhoneValidation, is_valid_phone};

/// Custom validator for CPF fields.
pub fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_cpf(cpf) {
        return Err(validator::ValidationError::new("CPF inválido"));
    }
    Ok(())
}

/// Custom validator for phone fields that must already be masked.
pub fn validate_phone_strict(phone: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_phone(phone, PhoneValidation::Strict) {
        return Err(validator::ValidationError::new(
            "Telefone deve estar no formato (00) 00000-0000",
        ));
    }
    Ok(())
}

/// Custom validator for phone fields that may still be unmasked.
pub fn validate_phone_lenient(phone: &str) -> Result<(), validator::ValidationError> {
    if !is_valid_phone(phone, PhoneValidation::Lenient) {
        return Err(validator::ValidationError::new("Telefone inválido"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_validator_reports_invalid_documents() {
        assert!(validate_cpf("529.982.247-25").is_ok());
        let err = validate_cpf("111.111.111-11").unwrap_err();
        assert_eq!(err.code, "CPF inválido");
    }

    #[test]
    fn phone_validators_follow_their_modes() {
        assert!(validate_phone_strict("(11) 98765-4321").is_ok());
        assert!(validate_phone_strict("11987654321").is_err());

        assert!(validate_phone_lenient("11987654321").is_ok());
        assert!(validate_phone_lenient("123").is_err());
    }
}
