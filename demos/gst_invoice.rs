//! GST invoice computation examples

use invoicing_core::{
    amount_in_words, format_inr, GstSlab, InvoiceTotals, LineItem, LineItemCalculation,
    SupplyContext,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Invoicing Core - GST Computation Examples\n");

    // 1. Standard GST slabs
    println!("📊 Legal GST Slabs:");
    let slabs = [
        (GstSlab::Exempt, "Exempt items (unprocessed food, medicines)"),
        (GstSlab::Reduced, "Reduced rate items"),
        (GstSlab::Standard, "Standard rate items"),
        (GstSlab::Higher, "Higher rate items (most services)"),
        (GstSlab::Luxury, "Luxury/Sin goods"),
    ];

    for (slab, description) in slabs.iter() {
        println!("  {:?}: {}% - {}", slab, slab.rate(), description);
    }
    println!();

    // 2. Intra-state vs inter-state split for the same line
    let line = LineItem::new(
        "Website redesign".to_string(),
        "9983".to_string(),
        1.0,
        45000.0,
        18.0,
    );

    println!("🏢 Intra-state Supply (CGST + SGST):");
    let intra = LineItemCalculation::calculate(&line, false);
    println!("  Taxable Value: {}", format_inr(intra.taxable_value));
    println!("  CGST (9%):     {}", format_inr(intra.cgst));
    println!("  SGST (9%):     {}", format_inr(intra.sgst));
    println!("  IGST:          {}", format_inr(intra.igst));
    println!("  Line Total:    {}", format_inr(intra.total));
    println!();

    println!("🌍 Inter-state Supply (IGST only):");
    let inter = LineItemCalculation::calculate(&line, true);
    println!("  Taxable Value: {}", format_inr(inter.taxable_value));
    println!("  CGST:          {}", format_inr(inter.cgst));
    println!("  SGST:          {}", format_inr(inter.sgst));
    println!("  IGST (18%):    {}", format_inr(inter.igst));
    println!("  Line Total:    {}", format_inr(inter.total));
    println!();

    // 3. A full invoice: classification decided once, applied to every item
    println!("🧾 Multi-item Invoice (Delhi seller, Karnataka client):");
    let context = SupplyContext::new("07".to_string(), "29".to_string());
    let items = vec![
        line,
        LineItem::new(
            "Stock photography".to_string(),
            "9996".to_string(),
            10.0,
            250.0,
            5.0,
        ),
        LineItem::new(
            "Printed manuals".to_string(),
            "4901".to_string(),
            50.0,
            80.0,
            0.0,
        ),
    ];

    let totals = InvoiceTotals::aggregate(&items, context.is_inter_state());
    println!("  Taxable Value: {}", format_inr(totals.taxable_value));
    println!("  CGST:          {}", format_inr(totals.cgst));
    println!("  SGST:          {}", format_inr(totals.sgst));
    println!("  IGST:          {}", format_inr(totals.igst));
    println!("  Total Tax:     {}", format_inr(totals.total_tax()));
    println!("  Grand Total:   {}", format_inr(totals.total));
    println!();

    // 4. Legal text rendering
    println!("✍️ Total in words:");
    println!(
        "  {} Rupees Only",
        amount_in_words(totals.total.round() as u64)
    );

    Ok(())
}
