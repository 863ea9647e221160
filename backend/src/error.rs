//! Error handling for the Obsidian inventory platform
//!
//! Provides consistent error responses in English and Spanish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Conflict: {message}")]
    Conflict { message: String, message_es: String },

    #[error("Insufficient product stock")]
    InsufficientStock {
        shortages: Vec<crate::services::order::ShortageItem>,
    },

    #[error("Insufficient material stock")]
    InsufficientMaterials {
        shortages: Vec<crate::services::recipe::MaterialRequirement>,
    },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Shorthand for a field validation failure
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        message_es: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
            message_es: message_es.into(),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Itemized shortage list for insufficient-stock rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortages: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let (status, error_detail) = match self {
            AppError::Validation {
                field,
                message,
                message_es,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message,
                    message_es,
                    field: Some(field),
                    shortages: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_es: format!("No se encontró {}", resource),
                    field: None,
                    shortages: None,
                },
            ),
            AppError::Conflict {
                message,
                message_es,
            } => (
                // The caller's request contradicts current state; the UI
                // treats this like any other 400 with a specific message
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "CONFLICT".to_string(),
                    message_en: message,
                    message_es,
                    field: None,
                    shortages: None,
                },
            ),
            AppError::InsufficientStock { shortages } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INSUFFICIENT_STOCK".to_string(),
                    message_en: "Insufficient stock to deliver the order. Review the listed products."
                        .to_string(),
                    message_es: "Stock insuficiente para entregar el pedido. Revisá los productos listados."
                        .to_string(),
                    field: None,
                    shortages: serde_json::to_value(&shortages).ok(),
                },
            ),
            AppError::InsufficientMaterials { shortages } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INSUFFICIENT_MATERIALS".to_string(),
                    message_en: "Insufficient material stock for the requested production."
                        .to_string(),
                    message_es: "Stock de materiales insuficiente para la producción solicitada."
                        .to_string(),
                    field: None,
                    shortages: serde_json::to_value(&shortages).ok(),
                },
            ),
            AppError::Storage(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "STORAGE_ERROR".to_string(),
                    message_en: format!("Storage error: {}", err),
                    message_es: "Error de almacenamiento".to_string(),
                    field: None,
                    shortages: None,
                },
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_es: "Ocurrió un error interno del servidor".to_string(),
                    field: None,
                    shortages: None,
                },
            ),
        };

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
