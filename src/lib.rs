//! # Invoicing Core
//!
//! A GST invoice computation engine for Indian businesses, providing
//! per-item tax breakdowns, invoice-level aggregation, and compliant
//! rendering of total amounts.
//!
//! ## Features
//!
//! - **Supply classification**: intra-state vs inter-state decided once per
//!   invoice from the seller and place-of-supply state codes
//! - **Tax calculation**: CGST/SGST half-split for intra-state supplies,
//!   single IGST component for inter-state
//! - **Aggregation**: invoice-level totals recomputed from line items on
//!   every read
//! - **Amount in words**: English rendering under the Indian lakh/crore
//!   numbering convention
//! - **Currency formatting**: Rupee display strings with Indian digit
//!   grouping and paise rounding
//! - **Reporting**: revenue and outstanding-receivables summaries across
//!   invoices
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicing_core::{amount_in_words, format_inr, InvoiceTotals, LineItem, SupplyContext};
//!
//! let items = vec![
//!     LineItem::new("Consulting".to_string(), "9983".to_string(), 1.0, 45000.0, 18.0),
//! ];
//!
//! // Delhi seller billing a Delhi client: CGST + SGST
//! let context = SupplyContext::new("07".to_string(), "07".to_string());
//! let totals = InvoiceTotals::aggregate(&items, context.is_inter_state());
//!
//! assert_eq!(totals.cgst, 4050.0);
//! assert_eq!(totals.sgst, 4050.0);
//! assert_eq!(format_inr(totals.total), "₹53,100.00");
//! assert_eq!(amount_in_words(totals.total.round() as u64), "Fifty Three Thousand One Hundred");
//! ```

pub mod format;
pub mod reports;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use format::*;
pub use reports::*;
pub use tax::*;
pub use types::*;
