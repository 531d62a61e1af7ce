//! Validation utilities
//!
//! The computation core itself is total: every numeric input produces a
//! well-defined result. These validators are the fail-fast complement for
//! callers that want contract violations surfaced before computing.

use crate::tax::GstSlab;
use crate::types::*;

/// Validate a GST registration state code
///
/// Indian GST state codes are exactly two ASCII digits (e.g. "07" for Delhi,
/// "29" for Karnataka).
pub fn validate_state_code(code: &str) -> InvoiceResult<()> {
    if code.trim().is_empty() {
        return Err(InvoiceError::Validation(
            "State code cannot be empty".to_string(),
        ));
    }

    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(InvoiceError::Validation(format!(
            "State code must be exactly two digits, got '{}'",
            code
        )));
    }

    Ok(())
}

/// Validate that a tax rate is one of the legal GST slabs (0/5/12/18/28)
pub fn validate_tax_slab(rate: f64) -> InvoiceResult<()> {
    match GstSlab::from_rate(rate) {
        Some(_) => Ok(()),
        None => Err(InvoiceError::Validation(format!(
            "Tax rate {}% is not a legal GST slab",
            rate
        ))),
    }
}

/// Validate a line item for regular (non-credit-note) invoicing
///
/// The calculator accepts negative quantities and rates and propagates their
/// sign for credit-note semantics; this validator rejects them for callers
/// that only issue regular invoices.
pub fn validate_line_item(item: &LineItem) -> InvoiceResult<()> {
    if item.description.trim().is_empty() {
        return Err(InvoiceError::Validation(
            "Line item description cannot be empty".to_string(),
        ));
    }

    if item.quantity < 0.0 {
        return Err(InvoiceError::Validation(
            "Line item quantity cannot be negative".to_string(),
        ));
    }

    if item.rate < 0.0 {
        return Err(InvoiceError::Validation(
            "Line item rate cannot be negative".to_string(),
        ));
    }

    if item.tax_rate < 0.0 {
        return Err(InvoiceError::Validation(
            "Line item tax rate cannot be negative".to_string(),
        ));
    }

    Ok(())
}

/// Validate a supply context for fail-fast callers
pub fn validate_supply_context(context: &SupplyContext) -> InvoiceResult<()> {
    validate_state_code(&context.seller_state_code)?;
    validate_state_code(&context.place_of_supply)?;
    Ok(())
}
