use crate::{auth::AuthContext, error::AppError, AppState};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use core_types::PeriodToken;
use renderer::ReportOwner;
use reporting::FinancialReport;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub period: Option<String>,
    pub format: Option<String>,
}

/// The two output encodings of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Json,
    Pdf,
}

/// The JSON boundary shape of a P&L report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitLossResponse {
    pub period: String,
    pub date_range: DateRange,
    pub summary: Summary,
    pub top_clients: Vec<TopClient>,
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct DateRange {
    /// First day of the period, `YYYY-MM-DD`.
    pub start: String,
    /// Last *inclusive* day of the period, `YYYY-MM-DD`.
    pub end: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    pub platform_fees: Decimal,
    pub withdrawal_fees: Decimal,
    pub operating_expenses: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopClient {
    pub name: String,
    pub email: String,
    pub revenue: Decimal,
    pub invoice_count: u32,
}

impl ProfitLossResponse {
    fn from_report(token: PeriodToken, report: &FinancialReport) -> Self {
        Self {
            period: token.to_string(),
            date_range: DateRange {
                start: report.period.start_date().to_string(),
                end: report.period.last_inclusive_date().to_string(),
            },
            summary: Summary {
                total_income: report.totals.income,
                platform_fees: report.totals.platform_fees,
                withdrawal_fees: report.totals.withdrawal_fees,
                operating_expenses: report.totals.operating_expenses,
                net_profit: report.totals.net_profit,
            },
            top_clients: report
                .top_clients
                .iter()
                .map(|client| TopClient {
                    name: client.display_name.clone(),
                    email: client.identity.clone(),
                    revenue: client.revenue,
                    invoice_count: client.invoice_count,
                })
                .collect(),
            currency: report.currency.clone(),
        }
    }
}

/// # GET /api/reports/profit-loss?period=<token>&format=<json|pdf>
///
/// Generates the authenticated user's P&L report for the requested period
/// and returns it in the requested encoding. The report is all-or-nothing:
/// any upstream failure surfaces as a generic 500.
pub async fn get_profit_loss(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let token = parse_period(query.period.as_deref())?;
    let format = parse_format(query.format.as_deref())?;

    let now = Utc::now();
    let report = state
        .engine
        .generate(&state.ledger, auth.user.id, token, now)
        .await?;

    match format {
        ReportFormat::Json => {
            Ok(Json(ProfitLossResponse::from_report(token, &report)).into_response())
        }
        ReportFormat::Pdf => {
            let owner = ReportOwner {
                name: auth.user.full_name,
                email: auth.user.email,
            };
            let bytes = renderer::render_profit_loss(&report, &owner, now)?;
            let filename = renderer::attachment_filename(token, now);
            let headers = [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ];
            Ok((headers, bytes).into_response())
        }
    }
}

fn parse_period(raw: Option<&str>) -> Result<PeriodToken, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::Validation("Missing required query parameter 'period'".to_string())
    })?;
    raw.parse().map_err(|_| {
        AppError::Validation(format!(
            "Invalid period '{raw}'; expected one of current_month, last_month, current_quarter, last_year"
        ))
    })
}

fn parse_format(raw: Option<&str>) -> Result<ReportFormat, AppError> {
    match raw {
        None | Some("json") => Ok(ReportFormat::Json),
        Some("pdf") => Ok(ReportFormat::Pdf),
        Some(other) => Err(AppError::Validation(format!(
            "Invalid format '{other}'; expected 'json' or 'pdf'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::TimeZone;
    use core_types::PeriodRange;
    use reporting::{ClientSummary, ReportTotals};
    use rust_decimal_macros::dec;

    #[test]
    fn period_parameter_is_required_and_closed() {
        assert!(parse_period(Some("current_month")).is_ok());
        assert!(parse_period(Some("last_year")).is_ok());

        let missing = parse_period(None).unwrap_err();
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let bogus = parse_period(Some("bogus")).unwrap_err();
        assert_eq!(bogus.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn format_defaults_to_json_and_rejects_unknown_encodings() {
        assert_eq!(parse_format(None).unwrap(), ReportFormat::Json);
        assert_eq!(parse_format(Some("json")).unwrap(), ReportFormat::Json);
        assert_eq!(parse_format(Some("pdf")).unwrap(), ReportFormat::Pdf);

        let csv = parse_format(Some("csv")).unwrap_err();
        assert_eq!(csv.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn response_shape_uses_camel_case_and_inclusive_end_date() {
        let report = FinancialReport {
            period: PeriodRange {
                label: "August 2026".to_string(),
                start: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap(),
            },
            totals: ReportTotals {
                income: dec!(300.35),
                refunds: dec!(50.00),
                gross_income: dec!(250.35),
                platform_fees: dec!(1.50),
                withdrawal_fees: dec!(0.40),
                operating_expenses: dec!(80.00),
                net_profit: dec!(168.45),
            },
            top_clients: vec![ClientSummary {
                identity: "a@acme.io".to_string(),
                display_name: "Acme".to_string(),
                revenue: dec!(300.35),
                invoice_count: 2,
            }],
            currency: "USD".to_string(),
        };

        let response = ProfitLossResponse::from_report(PeriodToken::CurrentMonth, &report);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["period"], "current_month");
        assert_eq!(value["dateRange"]["start"], "2026-08-01");
        // Half-open internally, closed at the boundary.
        assert_eq!(value["dateRange"]["end"], "2026-08-31");
        assert_eq!(value["summary"]["netProfit"], "168.45");
        assert_eq!(value["topClients"][0]["invoiceCount"], 2);
        assert_eq!(value["topClients"][0]["email"], "a@acme.io");
        assert_eq!(value["currency"], "USD");
    }
}
