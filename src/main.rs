use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::PeriodToken;
use database::connection::{connect, run_migrations};
use database::repository::LedgerRepository;
use reporting::ReportEngine;
use std::net::SocketAddr;
use uuid::Uuid;

/// The main entry point for the paylens reporting application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = configuration::load_settings().context("Failed to load configuration")?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => {
            let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
                .parse()
                .context("Invalid server host/port in configuration")?;
            web_server::run_server(addr, settings).await
        }
        Commands::Report(args) => handle_report(args, settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial reporting service for the freelance-payments platform.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP report server.
    Serve,
    /// Generate one P&L report and print it to the terminal.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The user to report on.
    #[arg(long)]
    user_id: Uuid,

    /// The reporting period (current_month, last_month, current_quarter, last_year).
    #[arg(long, default_value = "current_month")]
    period: PeriodToken,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Runs the same engine the HTTP boundary uses and prints the result.
async fn handle_report(args: ReportArgs, settings: configuration::Settings) -> anyhow::Result<()> {
    let db_pool = connect().await.context("Failed to connect to the database")?;
    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let repo = LedgerRepository::new(db_pool);
    let engine = ReportEngine::new(
        settings.fees,
        settings.reporting.currency.clone(),
        settings.reporting.top_clients,
    );

    let report = engine
        .generate(&repo, args.user_id, args.period, Utc::now())
        .await?;

    println!(
        "Profit & Loss: {} ({} to {})",
        report.period.label,
        report.period.start_date(),
        report.period.last_inclusive_date()
    );

    let currency = report.currency.as_str();
    let mut totals = Table::new();
    totals.set_header(vec!["Metric", "Amount"]);
    totals.add_row(vec!["Income".to_string(), format!("{currency} {:.2}", report.totals.income)]);
    totals.add_row(vec!["Refunds".to_string(), format!("{currency} {:.2}", report.totals.refunds)]);
    totals.add_row(vec![
        "Gross income".to_string(),
        format!("{currency} {:.2}", report.totals.gross_income),
    ]);
    totals.add_row(vec![
        "Platform fees".to_string(),
        format!("{currency} {:.2}", report.totals.platform_fees),
    ]);
    totals.add_row(vec![
        "Withdrawal fees".to_string(),
        format!("{currency} {:.2}", report.totals.withdrawal_fees),
    ]);
    totals.add_row(vec![
        "Operating expenses".to_string(),
        format!("{currency} {:.2}", report.totals.operating_expenses),
    ]);
    totals.add_row(vec![
        "Net profit".to_string(),
        format!("{currency} {:.2}", report.totals.net_profit),
    ]);
    println!("{totals}");

    if report.top_clients.is_empty() {
        println!("No client activity in this period.");
    } else {
        let mut clients = Table::new();
        clients.set_header(vec!["#", "Client", "Email", "Revenue", "Invoices"]);
        for (rank, client) in report.top_clients.iter().enumerate() {
            clients.add_row(vec![
                (rank + 1).to_string(),
                client.display_name.clone(),
                client.identity.clone(),
                format!("{currency} {:.2}", client.revenue),
                client.invoice_count.to_string(),
            ]);
        }
        println!("{clients}");
    }

    Ok(())
}
