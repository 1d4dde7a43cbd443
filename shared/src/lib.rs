use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod protocol;

// =========================================================
// Constants
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// Identifiers
// =========================================================

/// Backend record identifier.
///
/// The backend may send ids as JSON strings or integers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct Id(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for Id {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Id(s),
            RawId::Number(n) => Id(n.to_string()),
        }
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id(s)
    }
}

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =========================================================
// Users & Subscriptions
// =========================================================

/// Subscription tier. Unknown tiers are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Pro,
    Business,
    Other(String),
}

impl SubscriptionPlan {
    pub fn as_str(&self) -> &str {
        match self {
            SubscriptionPlan::Free => "free",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Business => "business",
            SubscriptionPlan::Other(name) => name,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, SubscriptionPlan::Free)
    }

    /// Upper-cased label used for plan badges
    pub fn badge(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<String> for SubscriptionPlan {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "free" => SubscriptionPlan::Free,
            "pro" => SubscriptionPlan::Pro,
            "business" => SubscriptionPlan::Business,
            _ => SubscriptionPlan::Other(s),
        }
    }
}

impl From<SubscriptionPlan> for String {
    fn from(plan: SubscriptionPlan) -> Self {
        plan.as_str().to_string()
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subscription_plan: Option<SubscriptionPlan>,
}

impl User {
    /// The user's plan; a missing plan counts as free
    pub fn plan(&self) -> SubscriptionPlan {
        self.subscription_plan.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(default)]
    pub subscription_plan: Option<SubscriptionPlan>,
    #[serde(default)]
    pub subscription_status: Option<String>,
}

/// A purchasable plan as listed on the pricing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Plan {
    /// The subscription tier this plan grants
    pub fn tier(&self) -> SubscriptionPlan {
        SubscriptionPlan::from(self.id.to_string())
    }
}

// =========================================================
// Tickets
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    /// Wire value, also used as the `<option>` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
            TicketPriority::Urgent => "URGENT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Creation date as `YYYY-MM-DD`, empty when unknown
    pub fn created_date(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

// =========================================================
// Request / Response bodies
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlansResponse {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub plan_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// Reference to a hosted checkout session
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentSubscriptionResponse {
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancelSubscriptionResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketsResponse {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketResponse {
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TicketChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error payload returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        let non_empty = |msg: &String| !msg.trim().is_empty();
        self.error
            .filter(non_empty)
            .or_else(|| self.message.filter(non_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let from_num: Id = serde_json::from_str("12").unwrap();
        let from_str: Id = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(from_num.as_str(), "12");
        assert_eq!(from_str.to_string(), "abc");
    }

    #[test]
    fn test_unknown_plan_is_preserved() {
        let plan: SubscriptionPlan = serde_json::from_str("\"enterprise\"").unwrap();
        assert_eq!(plan, SubscriptionPlan::Other("enterprise".to_string()));
        assert_eq!(plan.badge(), "ENTERPRISE");
        assert_eq!(serde_json::to_string(&plan).unwrap(), "\"enterprise\"");
    }

    #[test]
    fn test_user_without_plan_is_free() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert_eq!(user.plan(), SubscriptionPlan::Free);
    }

    #[test]
    fn test_ticket_wire_format() {
        let ticket: Ticket = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "title": "Printer issue",
            "description": "Won't turn on",
            "priority": "HIGH",
            "status": "IN_PROGRESS",
            "createdAt": "2024-03-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(ticket.priority, TicketPriority::High);
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.created_date(), "2024-03-05");
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!(TicketPriority::parse("URGENT"), Some(TicketPriority::Urgent));
        assert_eq!(TicketPriority::parse("urgent"), None);
        assert_eq!(TicketPriority::default(), TicketPriority::Medium);
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Invalid credentials","message":"x"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Invalid credentials"));
        let empty: ErrorBody = serde_json::from_str(r#"{"error":""}"#).unwrap();
        assert_eq!(empty.into_message(), None);
    }

    #[test]
    fn test_error_body_falls_back_to_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Plan not found"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Plan not found"));

        let both: ErrorBody =
            serde_json::from_str(r#"{"error":"Bad request","message":"ignored"}"#).unwrap();
        assert_eq!(both.into_message().as_deref(), Some("Bad request"));

        let blank_error: ErrorBody =
            serde_json::from_str(r#"{"error":" ","message":"Try again"}"#).unwrap();
        assert_eq!(blank_error.into_message().as_deref(), Some("Try again"));
    }
}
