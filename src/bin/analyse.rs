use std::{error::Error, fs::File};

use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finsight::{
    AnalyticsReport, CurrencyCode, ReportOptions, build_report, format_currency, local_now,
    parse_transactions_csv,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Print analytics and insights for the transactions in a CSV file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file with the header
    /// `id,date,type,amount,description,category,balance,currency`.
    #[arg(long)]
    csv: String,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    #[arg(short, long, default_value = "Etc/UTC")]
    timezone: String,

    /// Format insight amounts in this currency instead of the balance's currency.
    #[arg(long)]
    currency: Option<String>,

    /// Only analyse transactions recorded against this balance ID.
    #[arg(long)]
    balance: Option<i64>,

    /// How to print the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let now = local_now(&args.timezone)?;
    let currency = args
        .currency
        .as_deref()
        .map(CurrencyCode::new)
        .transpose()?;

    let file = File::open(&args.csv)
        .map_err(|error| format!("could not open {}: {error}", args.csv))?;
    let transactions = parse_transactions_csv(file, now.offset())?;

    let report = build_report(
        &transactions,
        now,
        ReportOptions {
            balance_id: args.balance,
            currency,
        },
    );

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &AnalyticsReport) {
    let analytics = &report.analytics;
    let money = |amount: f64| format_currency(amount, &report.currency);

    println!("Transactions:    {}", analytics.transaction_count);
    println!("Income:          {}", money(analytics.total_income));
    println!("Expenses:        {}", money(analytics.total_expenses));
    println!("Net change:      {}", money(analytics.net_change));
    println!("Average:         {}", money(analytics.average_transaction));

    if let Some(largest) = &analytics.largest_transaction {
        println!(
            "Largest:         {} ({:?})",
            money(largest.amount),
            largest.kind
        );
    }

    if !analytics.category_breakdown.is_empty() {
        println!("\nExpenses by category:");
        for total in &analytics.category_breakdown {
            println!(
                "  {:<24} {:>14} ({} transactions)",
                total.category,
                money(total.amount),
                total.count
            );
        }
    }

    if !analytics.monthly_trend.is_empty() {
        println!("\nMonthly trend:");
        for month in &analytics.monthly_trend {
            println!(
                "  {:<10} income {:>14}  expenses {:>14}",
                month.month,
                money(month.income),
                money(month.expenses)
            );
        }
    }

    println!("\nLast 7 days:");
    for day in &analytics.daily_pattern {
        println!("  {:<4} {:>14} ({})", day.day, money(day.amount), day.count);
    }

    let weekly = &analytics.weekly_comparison;
    println!(
        "\nThis week: {}  Last week: {}  Change: {} ({:.1}%)",
        money(weekly.this_week),
        money(weekly.last_week),
        money(weekly.change),
        weekly.change_percent
    );

    if !report.insights.is_empty() {
        println!("\nInsights:");
        for insight in &report.insights {
            println!("  [{:?}] {}", insight.kind, insight.message);
        }
    }
}
