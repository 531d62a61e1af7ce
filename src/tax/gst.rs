//! GST (Goods and Services Tax) calculation engine for Indian tax compliance

use serde::{Deserialize, Serialize};

use crate::types::LineItem;

/// Decide whether a supply is inter-state (IGST) or intra-state (CGST + SGST)
///
/// Returns `true` when the seller's state code and the declared place of
/// supply differ. The comparison is plain string equality; malformed or empty
/// codes compare unequal and therefore classify as inter-state. Callers are
/// responsible for supplying valid codes (see
/// [`crate::utils::validate_state_code`]).
///
/// Indian invoicing rules give a single invoice exactly one place of supply,
/// so this decision is made once per invoice and the same flag is applied to
/// every line item. It is never recomputed per item.
pub fn is_inter_state(seller_state_code: &str, place_of_supply: &str) -> bool {
    seller_state_code != place_of_supply
}

/// Standard GST rate slabs for goods and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Exempt items (unprocessed food, essential medicines) - 0%
    Exempt,
    /// Reduced rate items - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Higher rate items (most services) - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstSlab {
    /// Get the rate percentage for this slab
    pub fn rate(&self) -> f64 {
        match self {
            GstSlab::Exempt => 0.0,
            GstSlab::Reduced => 5.0,
            GstSlab::Standard => 12.0,
            GstSlab::Higher => 18.0,
            GstSlab::Luxury => 28.0,
        }
    }

    /// Find the slab matching a rate percentage, if it is a legal slab
    pub fn from_rate(rate: f64) -> Option<Self> {
        match rate {
            r if r == 0.0 => Some(GstSlab::Exempt),
            r if r == 5.0 => Some(GstSlab::Reduced),
            r if r == 12.0 => Some(GstSlab::Standard),
            r if r == 18.0 => Some(GstSlab::Higher),
            r if r == 28.0 => Some(GstSlab::Luxury),
            _ => None,
        }
    }
}

/// Detailed tax breakdown for a single line item
///
/// Derived on every read, never stored. For any item with a non-zero tax
/// rate, exactly one of {cgst & sgst, igst} is populated, and
/// `total == taxable_value + cgst + sgst + igst` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItemCalculation {
    /// Line value before tax (quantity * rate, unrounded)
    pub taxable_value: f64,
    /// Central GST amount (intra-state supplies only)
    pub cgst: f64,
    /// State GST amount (intra-state supplies only)
    pub sgst: f64,
    /// Integrated GST amount (inter-state supplies only)
    pub igst: f64,
    /// Line total including tax
    pub total: f64,
}

impl LineItemCalculation {
    /// Calculate the tax breakdown for one line item
    ///
    /// A total function: every numeric input, including zero and negative
    /// quantities or rates, produces a well-defined result. Negative values
    /// propagate their sign through `total` (credit-note semantics); callers
    /// that require non-negative lines should use
    /// [`crate::utils::validate_line_item`] first.
    ///
    /// No rounding is applied here. Full floating-point precision is carried
    /// forward so rounding error does not compound across aggregation.
    pub fn calculate(item: &LineItem, inter_state: bool) -> Self {
        let taxable_value = item.quantity * item.rate;

        let (cgst, sgst, igst) = if inter_state {
            (0.0, 0.0, taxable_value * item.tax_rate / 100.0)
        } else {
            // The slab rate splits evenly in half between the central and
            // state components; the total tax burden is identical either way.
            let half = taxable_value * item.tax_rate / 200.0;
            (half, half, 0.0)
        };

        let total = taxable_value + cgst + sgst + igst;

        Self {
            taxable_value,
            cgst,
            sgst,
            igst,
            total,
        }
    }

    /// Total tax levied on this line (CGST + SGST + IGST)
    pub fn total_tax(&self) -> f64 {
        self.cgst + self.sgst + self.igst
    }
}

/// Invoice-level totals: the component-wise sum of all line calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of taxable values
    pub taxable_value: f64,
    /// Sum of CGST amounts
    pub cgst: f64,
    /// Sum of SGST amounts
    pub sgst: f64,
    /// Sum of IGST amounts
    pub igst: f64,
    /// Grand total including tax
    pub total: f64,
}

impl InvoiceTotals {
    /// Aggregate all line items of an invoice under a single classification
    ///
    /// The `inter_state` flag is decided once per invoice (see
    /// [`is_inter_state`]) and applied uniformly to every item. Fields are
    /// summed with ordinary floating-point addition in input order; an empty
    /// slice yields all-zero totals.
    pub fn aggregate(items: &[LineItem], inter_state: bool) -> Self {
        items
            .iter()
            .map(|item| LineItemCalculation::calculate(item, inter_state))
            .fold(Self::default(), |acc, calc| acc.add(&calc))
    }

    /// Fold one line calculation into the running totals
    pub fn add(&self, calc: &LineItemCalculation) -> Self {
        Self {
            taxable_value: self.taxable_value + calc.taxable_value,
            cgst: self.cgst + calc.cgst,
            sgst: self.sgst + calc.sgst,
            igst: self.igst + calc.igst,
            total: self.total + calc.total,
        }
    }

    /// Total tax levied on the invoice (CGST + SGST + IGST)
    pub fn total_tax(&self) -> f64 {
        self.cgst + self.sgst + self.igst
    }
}
