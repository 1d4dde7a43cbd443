use crate::{
    AuthResponse, CancelSubscriptionResponse, CheckoutRequest, CheckoutSession,
    CreateTicketRequest, CurrentSubscriptionResponse, DeleteResponse, Id, LoginRequest,
    MeResponse, PlansResponse, RegisterRequest, TicketChanges, TicketResponse, TicketsResponse,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// The path is relative to the API base address and may carry a query string.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path (or suffix).
    fn path(&self) -> String;

    /// Whether the request itself is sent as the JSON body.
    fn has_body(&self) -> bool {
        matches!(Self::METHOD, HttpMethod::Post | HttpMethod::Put)
    }
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/auth/login".to_string()
    }
}

/// Fetch the user behind the current bearer token
#[derive(Debug, Serialize)]
pub struct MeRequest;

impl ApiRequest for MeRequest {
    type Response = MeResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

// =========================================================
// Subscriptions
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListPlansRequest;

impl ApiRequest for ListPlansRequest {
    type Response = PlansResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/subscriptions/plans".to_string()
    }
}

impl ApiRequest for CheckoutRequest {
    type Response = CheckoutSession;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/subscriptions/create-checkout".to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentSubscriptionRequest;

impl ApiRequest for CurrentSubscriptionRequest {
    type Response = CurrentSubscriptionResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/subscriptions/current".to_string()
    }
}

/// Cancel the current paid subscription (no body)
#[derive(Debug, Serialize)]
pub struct CancelSubscriptionRequest;

impl ApiRequest for CancelSubscriptionRequest {
    type Response = CancelSubscriptionResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/subscriptions/cancel".to_string()
    }

    fn has_body(&self) -> bool {
        false
    }
}

// =========================================================
// Tickets
// =========================================================

/// List tickets, newest first, optionally limited
#[derive(Debug, Default, Serialize)]
pub struct ListTicketsRequest {
    #[serde(skip)]
    pub limit: Option<u32>,
}

impl ApiRequest for ListTicketsRequest {
    type Response = TicketsResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        match self.limit {
            Some(limit) => format!("/tickets?limit={}", limit),
            None => "/tickets".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetTicketRequest {
    #[serde(skip)]
    pub id: Id,
}

impl ApiRequest for GetTicketRequest {
    type Response = TicketResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/tickets/{}", self.id)
    }
}

impl ApiRequest for CreateTicketRequest {
    type Response = TicketResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/tickets".to_string()
    }
}

/// Partial update; only the fields that are set are sent
#[derive(Debug, Serialize)]
pub struct UpdateTicketRequest {
    #[serde(skip)]
    pub id: Id,
    #[serde(flatten)]
    pub changes: TicketChanges,
}

impl ApiRequest for UpdateTicketRequest {
    type Response = TicketResponse;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/tickets/{}", self.id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTicketRequest {
    #[serde(skip)]
    pub id: Id,
}

impl ApiRequest for DeleteTicketRequest {
    type Response = DeleteResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/tickets/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tickets_path_carries_limit() {
        assert_eq!(ListTicketsRequest { limit: Some(5) }.path(), "/tickets?limit=5");
        assert_eq!(ListTicketsRequest::default().path(), "/tickets");
    }

    #[test]
    fn test_ticket_paths_use_id() {
        let id = Id::from("42");
        assert_eq!(GetTicketRequest { id: id.clone() }.path(), "/tickets/42");
        assert_eq!(DeleteTicketRequest { id }.path(), "/tickets/42");
    }

    #[test]
    fn test_body_rules() {
        assert!(LoginRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
        }
        .has_body());
        assert!(!CancelSubscriptionRequest.has_body());
        assert!(!MeRequest.has_body());
    }

    #[test]
    fn test_update_body_omits_id() {
        let req = UpdateTicketRequest {
            id: Id::from("7"),
            changes: TicketChanges {
                status: Some(crate::TicketStatus::Closed),
                ..Default::default()
            },
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "CLOSED" }));
    }
}
