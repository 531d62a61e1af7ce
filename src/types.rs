//! Core types and data structures for the invoicing system

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Invoice is being edited and has not been issued
    Draft,
    /// Invoice has been issued to the client
    Sent,
    /// Payment has been received in full
    Paid,
    /// Invoice is past its due date without payment
    Overdue,
}

impl InvoiceStatus {
    /// Whether this status counts towards realized revenue
    pub fn is_paid(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }
}

/// One billable entry on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque identity used to correlate editing state; carries no
    /// computational meaning
    pub id: Uuid,
    /// Free-text description of the goods or service
    pub description: String,
    /// HSN (goods) or SAC (services) classification code, carried through
    /// without validation
    pub hsn_sac: String,
    /// Quantity billed
    pub quantity: f64,
    /// Price per unit before tax
    pub rate: f64,
    /// GST rate as a percentage (e.g. 18.0 for 18%)
    pub tax_rate: f64,
}

impl LineItem {
    /// Create a new line item with a fresh identity
    pub fn new(
        description: String,
        hsn_sac: String,
        quantity: f64,
        rate: f64,
        tax_rate: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            hsn_sac,
            quantity,
            rate,
            tax_rate,
        }
    }
}

/// Seller and place-of-supply jurisdictions for one invoice
///
/// Equality of the two state codes is the single fact that selects the tax
/// split for the entire invoice. Codes are the two-digit state identifiers
/// used in Indian GST registration; supplying well-formed codes is the
/// caller's responsibility (see [`crate::utils::validate_state_code`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyContext {
    /// State code from the seller's GST registration
    pub seller_state_code: String,
    /// Declared place of supply (or the buyer's registered state)
    pub place_of_supply: String,
}

impl SupplyContext {
    /// Create a new supply context
    pub fn new(seller_state_code: String, place_of_supply: String) -> Self {
        Self {
            seller_state_code,
            place_of_supply,
        }
    }

    /// Whether this invoice is an inter-state supply (IGST applies)
    pub fn is_inter_state(&self) -> bool {
        crate::tax::is_inter_state(&self.seller_state_code, &self.place_of_supply)
    }
}

/// A complete invoice as supplied by the editing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the invoice
    pub id: Uuid,
    /// Human-facing invoice number
    pub number: String,
    /// Date of issue
    pub date: NaiveDate,
    /// Payment due date
    pub due_date: NaiveDate,
    /// Current lifecycle status
    pub status: InvoiceStatus,
    /// Declared place of supply for the whole invoice
    pub place_of_supply: String,
    /// Billable line items
    pub items: Vec<LineItem>,
}

impl Invoice {
    /// Create a new draft invoice
    pub fn new(
        number: String,
        date: NaiveDate,
        due_date: NaiveDate,
        place_of_supply: String,
        items: Vec<LineItem>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            date,
            due_date,
            status: InvoiceStatus::Draft,
            place_of_supply,
            items,
        }
    }

    /// Supply context for this invoice given the seller's registered state
    pub fn supply_context(&self, seller_state_code: &str) -> SupplyContext {
        SupplyContext::new(seller_state_code.to_string(), self.place_of_supply.clone())
    }
}

/// Errors that can occur in the invoicing system
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for invoicing operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
