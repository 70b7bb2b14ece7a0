//! Patient registration business logic service.
//!
//! Validates the registration form, normalizes the document and phone
//! fields through the input masks, and submits the record to the portal,
//! reporting the outcome through the toast manager.

use crate::errors::{ClientError, ClientResult};
use crate::http::{FetchOutcome, HttpGateway, RequestOptions};
use crate::toast::{ToastLevel, ToastManager};
use crate::validation::{mask_cpf, mask_phone, validate_cpf, validate_phone_lenient};
use chrono::NaiveDate;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

/// Endpoint receiving new patient records.
const CREATE_PATIENT_PATH: &str = "/patients/api/create";

/// Patient registration form, as filled in on the portal.
///
/// The document and phone fields accept masked or bare-digit input; they
/// are normalized to their masked forms before submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientForm {
    #[validate(length(min = 3, max = 150, message = "Nome completo deve ter entre 3 e 150 caracteres"))]
    pub full_name: String,

    #[validate(
        length(min = 11, max = 14, message = "CPF deve ter entre 11 e 14 caracteres"),
        custom(function = "validate_cpf")
    )]
    pub cpf: String,

    pub birth_date: NaiveDate,

    #[validate(
        length(min = 10, max = 15, message = "Telefone deve ter entre 10 e 15 caracteres"),
        custom(function = "validate_phone_lenient")
    )]
    pub phone: String,

    #[validate(length(max = 100, message = "Gosto musical deve ter no máximo 100 caracteres"))]
    pub musical_preference: String,

    pub observations: String,
}

/// Patient record as the portal returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientRecord {
    pub id: i64,
    pub full_name: String,
    pub cpf: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    pub musical_preference: Option<String>,
    pub observations: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Server acknowledgement for a created patient.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatientCreated {
    pub message: String,
    pub patient: PatientRecord,
}

/// Service layer for patient operations.
pub struct PatientService {
    gateway: HttpGateway,
    toasts: ToastManager,
}

impl PatientService {
    /// Creates a new PatientService instance.
    ///
    /// # Arguments
    /// * `gateway` - Gateway carrying the anti-forgery augmentation
    /// * `toasts` - Manager used to report submission outcomes
    pub fn new(gateway: HttpGateway, toasts: ToastManager) -> Self {
        Self { gateway, toasts }
    }

    /// Validates and submits a new patient record.
    ///
    /// # Arguments
    /// * `form` - Patient registration data as entered by the user
    ///
    /// # Returns
    /// The submission outcome: the created record on success, the server's
    /// error message otherwise. The outcome is also shown as a toast.
    ///
    /// # Errors
    /// Returns `ClientError` for validation failures; no request is made in
    /// that case.
    pub async fn submit(&self, form: PatientForm) -> ClientResult<FetchOutcome<PatientCreated>> {
        // Input validation using validator crate
        if let Err(validation_errors) = form.validate() {
            let error_messages: Vec<String> = validation_errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| {
                        format!("{}: {}", field, error.message.as_ref().unwrap_or(&error.code))
                    })
                })
                .collect();

            return Err(ClientError::validation(error_messages.join(", ")));
        }

        let mut record = form;
        record.cpf = mask_cpf(&record.cpf);
        record.phone = mask_phone(&record.phone);

        let body = serde_json::to_string(&record)
            .map_err(|err| ClientError::internal_error(format!("Failed to encode patient record: {err}")))?;

        info!("Submitting patient record for {}", record.full_name);

        let outcome: FetchOutcome<PatientCreated> = self
            .gateway
            .fetch_json(
                CREATE_PATIENT_PATH,
                RequestOptions::new().method(Method::POST).body_text(body),
            )
            .await;

        if outcome.success {
            let message = outcome
                .data
                .as_ref()
                .map(|created| created.message.clone())
                .unwrap_or_else(|| "Paciente cadastrado com sucesso".to_string());
            self.toasts.show(message, ToastLevel::Success);
        } else {
            let message = outcome
                .error
                .clone()
                .unwrap_or_else(|| "Erro ao cadastrar paciente".to_string());
            self.toasts.show(message, ToastLevel::Error);
        }

        Ok(outcome)
    }
}
