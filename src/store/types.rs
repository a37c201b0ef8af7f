//! Persisted record types
//!
//! - `OrderConfirmation`: a confirmed order, returned verbatim by the admin lookup
//! - `SpecialRequest`: a selectable special-request option with an active flag and sort rank
//! - `SpecialRequestOption`: the `{id, label, value}` projection served to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A confirmed order
///
/// `items` and `special_requests` are stored as JSON text and surfaced
/// as JSON values so the record serializes the way it was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub items: serde_json::Value,
    pub special_requests: serde_json::Value,
    pub total_cents: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Create a confirmation with empty items, confirmed now
    pub fn new(order_id: i64, customer_name: impl Into<String>, customer_email: impl Into<String>) -> Self {
        Self {
            order_id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            items: serde_json::Value::Array(Vec::new()),
            special_requests: serde_json::Value::Array(Vec::new()),
            total_cents: 0,
            status: "confirmed".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Builder method: set line items
    pub fn items(mut self, items: serde_json::Value) -> Self {
        self.items = items;
        self
    }

    /// Builder method: set the chosen special requests
    pub fn special_requests(mut self, requests: serde_json::Value) -> Self {
        self.special_requests = requests;
        self
    }

    /// Builder method: set order total
    pub fn total_cents(mut self, total: i64) -> Self {
        self.total_cents = total;
        self
    }

    /// Builder method: set status
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builder method: set confirmation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A special-request option as stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecialRequest {
    pub id: i64,
    pub label: String,
    pub value: String,
    pub active: bool,
    pub sort: i64,
}

impl SpecialRequest {
    /// Create an active option
    pub fn new(id: i64, label: impl Into<String>, value: impl Into<String>, sort: i64) -> Self {
        Self {
            id,
            label: label.into(),
            value: value.into(),
            active: true,
            sort,
        }
    }

    /// Builder method: mark inactive
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Client-facing projection of an active special request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialRequestOption {
    pub id: i64,
    pub label: String,
    pub value: String,
}
