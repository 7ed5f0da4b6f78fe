use finlink_core_model::RequestStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Credentials are not verified against stored data in this scope; the
/// request is only checked for shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

/// One uploaded verification document. The mock backend acknowledges
/// uploads but never stores the bytes.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KycDocument {
    #[validate(length(min = 1, message = "file name is required"))]
    pub file_name: String,

    pub content_type: String,

    #[serde(default)]
    pub bytes: Vec<u8>,
}

/// KYC submission: an identity document plus a supporting document
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KycUploadRequest {
    #[validate(nested)]
    pub identity_document: KycDocument,

    #[validate(nested)]
    pub supporting_document: KycDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoanApplicationRequest {
    /// Requested principal; must be strictly positive (checked by the
    /// service, since `validator` has no decimal range rule)
    pub amount: Decimal,

    #[validate(length(min = 1, max = 200, message = "purpose is required"))]
    pub purpose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"), length(max = 100))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BroadcastRequest {
    #[validate(length(min = 1, max = 100, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "message is required"))]
    pub message: String,
}

/// Terminal outcome of an admin review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestDecision {
    Approved,
    Rejected,
}

impl RequestDecision {
    pub fn as_status(&self) -> RequestStatus {
        match self {
            RequestDecision::Approved => RequestStatus::Approved,
            RequestDecision::Rejected => RequestStatus::Rejected,
        }
    }
}

impl std::fmt::Display for RequestDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestDecision::Approved => write!(f, "Approved"),
            RequestDecision::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for RequestDecision {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(RequestDecision::Approved),
            "Rejected" => Ok(RequestDecision::Rejected),
            _ => Err(()),
        }
    }
}
