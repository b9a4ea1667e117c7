//! Parse command - extract an order draft from a single slip file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

use slipscan_core::models::draft::{OrderDraft, OrderType, PaymentStatus};
use slipscan_core::SlipParser;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Reference year for dates written without one
    #[arg(short = 'y', long)]
    year: Option<i32>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    // Read slip text
    let text = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Parsing file: {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            debug!("Reading slip text from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let draft = build_parser(args.year).parse(&text);

    // Format output
    let output = format_draft(&draft, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

pub fn build_parser(year: Option<i32>) -> SlipParser {
    match year {
        Some(year) => SlipParser::new().with_reference_year(year),
        None => SlipParser::new(),
    }
}

pub fn format_draft(draft: &OrderDraft, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(draft)?),
        OutputFormat::Csv => format_csv(draft),
        OutputFormat::Text => Ok(format_text(draft)),
    }
}

pub fn order_type_label(order_type: OrderType) -> &'static str {
    match order_type {
        OrderType::Delivery => "DELIVERY",
        OrderType::PickUp => "PICK_UP",
    }
}

pub fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "PAID",
        PaymentStatus::Unpaid => "UNPAID",
        PaymentStatus::Downpayment => "DOWNPAYMENT",
    }
}

fn format_csv(draft: &OrderDraft) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let flowers = draft.flowers.unwrap_or_default();
    let entries = flowers.entries();

    // Column order matches the order sheet
    let mut header = vec![
        "targetDate",
        "deliveryTime",
        "type",
        "status",
        "deliveredTo",
        "orderedBy",
        "contactNumber",
        "address",
        "cardMessage",
    ];
    for (name, _) in entries {
        header.push(name);
    }
    header.extend([
        "code",
        "others",
        "orderSummary",
        "notes",
        "deliveryFee",
        "total",
        "amountPaid",
        "balance",
    ]);
    wtr.write_record(&header)?;

    let mut record = vec![
        draft.target_date.map(|d| d.to_string()).unwrap_or_default(),
        draft.delivery_time.clone().unwrap_or_default(),
        draft
            .order_type
            .map(|t| order_type_label(t).to_string())
            .unwrap_or_default(),
        draft
            .status
            .map(|s| status_label(s).to_string())
            .unwrap_or_default(),
        draft.delivered_to.clone().unwrap_or_default(),
        draft.ordered_by.clone().unwrap_or_default(),
        draft.contact_number.clone().unwrap_or_default(),
        draft.address.clone().unwrap_or_default(),
        draft.card_message.clone().unwrap_or_default(),
    ];
    for (_, count) in entries {
        record.push(count.to_string());
    }
    record.push(draft.code.clone().unwrap_or_default());
    record.push(draft.others.clone().unwrap_or_default());
    record.push(draft.order_summary.clone().unwrap_or_default());
    record.push(draft.notes.clone().unwrap_or_default());
    record.push(money_or_empty(draft.delivery_fee));
    record.push(money_or_empty(draft.total));
    record.push(money_or_empty(draft.amount_paid));
    record.push(money_or_empty(draft.balance));
    wtr.write_record(&record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn money_or_empty(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}

fn money_or_dash(value: Option<Decimal>) -> String {
    value.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

fn format_text(draft: &OrderDraft) -> String {
    let mut output = String::new();

    if let Some(date) = draft.target_date {
        output.push_str(&format!("Date: {}\n", date));
    }
    if let Some(time) = &draft.delivery_time {
        output.push_str(&format!("Time: {}\n", time));
    }
    if let Some(order_type) = draft.order_type {
        output.push_str(&format!("Type: {}\n", order_type_label(order_type)));
    }
    output.push_str("\n");

    output.push_str("Recipient:\n");
    output.push_str(&format!(
        "  {}\n",
        draft.delivered_to.as_deref().unwrap_or("-")
    ));
    if let Some(address) = &draft.address {
        output.push_str(&format!("  {}\n", address));
    }
    output.push_str("\n");

    output.push_str("Customer:\n");
    output.push_str(&format!(
        "  {}\n",
        draft.ordered_by.as_deref().unwrap_or("-")
    ));
    if let Some(contact) = &draft.contact_number {
        output.push_str(&format!("  Contact: {}\n", contact));
    }
    output.push_str("\n");

    if let Some(flowers) = &draft.flowers {
        output.push_str("Flowers:\n");
        for (name, count) in flowers.entries() {
            if count > 0 {
                output.push_str(&format!("  {}: {}\n", name, count));
            }
        }
        output.push_str("\n");
    }

    if let Some(message) = &draft.card_message {
        output.push_str(&format!("Card message: {}\n", message));
        output.push_str("\n");
    }

    output.push_str("Payment:\n");
    output.push_str(&format!("  Total:   {}\n", money_or_dash(draft.total)));
    output.push_str(&format!("  Paid:    {}\n", money_or_dash(draft.amount_paid)));
    output.push_str(&format!("  Balance: {}\n", money_or_dash(draft.balance)));
    if let Some(fee) = draft.delivery_fee {
        output.push_str(&format!("  Fee:     {}\n", fee));
    }
    if let Some(status) = draft.status {
        output.push_str(&format!("  Status:  {}\n", status_label(status)));
    }

    if let Some(notes) = &draft.notes {
        output.push_str(&format!("\nNotes: {}\n", notes));
    }

    output
}
