use dash_core::formatting::{format_count, format_currency};
use dash_core::models::{DatasetSummary, DerivedEventView};

// ── Summary cards ──────────────────────────────────────────────────────────────

/// Render the four headline cards as aligned text lines.
///
/// Mirrors the dashboard's card row: total spend, tickets sold, average cost
/// per ticket and total link clicks.
pub fn render_summary(summary: &DatasetSummary, currency: &str) -> String {
    let mut out = String::new();
    out.push_str("Campaign Performance\n");
    out.push_str("====================\n\n");
    out.push_str(&format!(
        "  Total Ad Spend    {}\n",
        format_currency(summary.total_ad_spend, currency)
    ));
    out.push_str(&format!(
        "  Tickets Sold      {}\n",
        format_count(summary.total_tickets_sold)
    ));
    out.push_str(&format!(
        "  Cost Per Ticket   {}\n",
        format_currency(summary.average_cost_per_conversion, currency)
    ));
    out.push_str(&format!(
        "  Total Clicks      {}\n",
        format_count(summary.total_link_clicks)
    ));
    out
}

// ── Per-event breakdown ────────────────────────────────────────────────────────

/// Render the per-campaign breakdown, one numbered block per record in
/// source order. Events without a ticket sale show a zero cost per
/// conversion.
pub fn render_breakdown(views: &[DerivedEventView], currency: &str) -> String {
    let mut out = String::new();
    out.push_str("Campaign Breakdown\n");
    out.push_str("------------------\n");
    for (index, view) in views.iter().enumerate() {
        out.push_str(&format!("\nCampaign {}: {}\n", index + 1, view.event_name));
        out.push_str(&format!(
            "   Spend: {}   Tickets: {}   Clicks: {}   Cost/Conversion: {}\n",
            format_currency(view.ad_spend, currency),
            format_count(view.tickets_sold),
            format_count(view.link_clicks),
            format_currency(view.cost_per_conversion, currency),
        ));
    }
    out
}

/// Full text report: summary cards followed by the breakdown.
pub fn render(summary: &DatasetSummary, views: &[DerivedEventView], currency: &str) -> String {
    format!("{}\n{}", render_summary(summary, currency), render_breakdown(views, currency))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
