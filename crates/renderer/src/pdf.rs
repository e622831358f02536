use crate::error::RenderError;
use chrono::{DateTime, Utc};
use core_types::PeriodToken;
use reporting::FinancialReport;
use rust_decimal::Decimal;
use std::fmt::Write as _;

/// Identity fields stamped on the statement header. Supplied by the caller
/// from the authenticated session, never from request parameters.
#[derive(Debug, Clone)]
pub struct ReportOwner {
    pub name: String,
    pub email: String,
}

/// The download filename for a generated statement, encoding the period
/// token and the generation instant in epoch milliseconds.
pub fn attachment_filename(token: PeriodToken, generated_at: DateTime<Utc>) -> String {
    format!("P&L-{}-{}.pdf", token, generated_at.timestamp_millis())
}

/// Renders a one-page P&L statement as PDF bytes.
///
/// The document is a single uncompressed text stream in Helvetica: header,
/// period and owner lines, the totals block, and the top-client table. The
/// report value is rendered as-is; no figure is recomputed here.
pub fn render_profit_loss(
    report: &FinancialReport,
    owner: &ReportOwner,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, RenderError> {
    let mut lines = Vec::new();
    lines.push(format!("Period: {}", report.period.label));
    lines.push(format!(
        "Date range: {} to {}",
        report.period.start_date(),
        report.period.last_inclusive_date()
    ));
    lines.push(format!("Prepared for: {} <{}>", owner.name, owner.email));
    lines.push(format!(
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    lines.push(String::new());

    let t = &report.totals;
    let c = report.currency.as_str();
    lines.push(format!("Income:             {}", money(c, t.income)));
    lines.push(format!("Refunds:            {}", money(c, t.refunds)));
    lines.push(format!("Gross income:       {}", money(c, t.gross_income)));
    lines.push(format!("Platform fees:      {}", money(c, t.platform_fees)));
    lines.push(format!("Withdrawal fees:    {}", money(c, t.withdrawal_fees)));
    lines.push(format!("Operating expenses: {}", money(c, t.operating_expenses)));
    lines.push(format!("Net profit:         {}", money(c, t.net_profit)));
    lines.push(String::new());

    if report.top_clients.is_empty() {
        lines.push("No client activity in this period.".to_string());
    } else {
        lines.push("Top clients by revenue:".to_string());
        for (rank, client) in report.top_clients.iter().enumerate() {
            lines.push(format!(
                "{}. {} <{}>: {} across {} invoice(s)",
                rank + 1,
                client.display_name,
                client.identity,
                money(c, client.revenue),
                client.invoice_count
            ));
        }
    }

    let content = content_stream("Profit & Loss Statement", &lines)?;
    Ok(assemble(&content))
}

fn money(currency: &str, amount: Decimal) -> String {
    format!("{currency} {amount:.2}")
}

/// Builds the page's text operators: a 16pt title followed by 11pt body
/// lines advanced with `T*`.
fn content_stream(title: &str, lines: &[String]) -> Result<String, RenderError> {
    let mut content = String::new();
    writeln!(content, "BT")?;
    writeln!(content, "/F1 16 Tf")?;
    writeln!(content, "50 742 Td")?;
    writeln!(content, "({}) Tj", escape_text(title))?;
    writeln!(content, "ET")?;
    writeln!(content, "BT")?;
    writeln!(content, "/F1 11 Tf")?;
    writeln!(content, "14 TL")?;
    writeln!(content, "50 712 Td")?;
    for line in lines {
        writeln!(content, "({}) Tj", escape_text(line))?;
        writeln!(content, "T*")?;
    }
    writeln!(content, "ET")?;
    Ok(content)
}

/// Escapes the three characters with meaning inside a PDF string literal.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Assembles the fixed five-object document (catalog, pages, page, font,
/// content stream) with a correct cross-reference table.
fn assemble(content: &str) -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );
    out
}
