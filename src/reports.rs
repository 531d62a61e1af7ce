//! Revenue and receivables summaries across invoices

use serde::{Deserialize, Serialize};

use crate::tax::InvoiceTotals;
use crate::types::Invoice;

impl Invoice {
    /// Compute this invoice's aggregate totals
    ///
    /// Classification happens once here, from the invoice's declared place
    /// of supply against the seller's registered state, and applies to every
    /// line item.
    pub fn totals(&self, seller_state_code: &str) -> InvoiceTotals {
        let inter_state = self.supply_context(seller_state_code).is_inter_state();
        InvoiceTotals::aggregate(&self.items, inter_state)
    }
}

/// Revenue and outstanding-receivables summary over a set of invoices
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Grand totals of invoices whose payment has completed
    pub total_revenue: f64,
    /// Grand totals of all invoices still awaiting payment
    pub outstanding: f64,
    /// Number of paid invoices
    pub paid_count: usize,
    /// Number of unpaid invoices
    pub unpaid_count: usize,
}

/// Summarize revenue and outstanding receivables
///
/// Paid invoices contribute their grand total to `total_revenue`; every
/// other status contributes to `outstanding`. Totals are recomputed from the
/// line items on every call, never cached.
pub fn revenue_summary(invoices: &[Invoice], seller_state_code: &str) -> RevenueSummary {
    invoices.iter().fold(RevenueSummary::default(), |mut acc, invoice| {
        let total = invoice.totals(seller_state_code).total;
        if invoice.status.is_paid() {
            acc.total_revenue += total;
            acc.paid_count += 1;
        } else {
            acc.outstanding += total;
            acc.unpaid_count += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InvoiceStatus, LineItem};
    use chrono::NaiveDate;

    fn invoice(status: InvoiceStatus, place_of_supply: &str, rate: f64) -> Invoice {
        let mut inv = Invoice::new(
            "INV-001".to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            place_of_supply.to_string(),
            vec![LineItem::new(
                "Consulting".to_string(),
                "9983".to_string(),
                1.0,
                rate,
                18.0,
            )],
        );
        inv.status = status;
        inv
    }

    #[test]
    fn test_invoice_totals_use_place_of_supply() {
        let inv = invoice(InvoiceStatus::Draft, "29", 10000.0);

        let inter = inv.totals("07");
        assert_eq!(inter.igst, 1800.0);
        assert_eq!(inter.cgst, 0.0);

        let intra = inv.totals("29");
        assert_eq!(intra.igst, 0.0);
        assert_eq!(intra.cgst, 900.0);
        assert_eq!(intra.sgst, 900.0);
    }

    #[test]
    fn test_revenue_summary_splits_by_status() {
        let invoices = vec![
            invoice(InvoiceStatus::Paid, "07", 10000.0),
            invoice(InvoiceStatus::Sent, "07", 5000.0),
            invoice(InvoiceStatus::Overdue, "29", 1000.0),
        ];

        let summary = revenue_summary(&invoices, "07");

        assert_eq!(summary.total_revenue, 11800.0);
        assert_eq!(summary.outstanding, 5900.0 + 1180.0);
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.unpaid_count, 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = revenue_summary(&[], "07");
        assert_eq!(summary, RevenueSummary::default());
    }
}
