use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User role. Stored as the capitalized form; lowercase aliases are accepted
/// on input because older frontend builds sent them that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(alias = "tourist")]
    Tourist,
    #[serde(alias = "guide")]
    Guide,
    #[serde(alias = "admin")]
    Admin,
}

/// Guide-verification status. Unset on freshly registered users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(alias = "requested")]
    Requested,
    #[serde(alias = "verified")]
    Verified,
}

/// Identity payload presented at login; only the email ends up in the token.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityClaim {
    pub email: String,
}

/// Registration payload. Email is the unique key; everything else is an open
/// document the frontend controls (photo URL, display name, and so on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub tourist_email: String,
    pub guide_name: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub guide_email: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWishlistEntry {
    pub email: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPackage {
    /// Category used by /categoryBasePackages lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
