use anyhow::Context;
use colored::Colorize;

use hashline_ledger::{ChainValidator, Ledger, Record};
use hashline_types::PayloadDigest;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Print(args) => cmd_print(args, &cli.format),
        Command::Search(args) => cmd_search(args, &cli.format),
        Command::Digest(args) => cmd_digest(args, &cli.format),
        Command::Verify(args) => cmd_verify(args),
    }
}

fn build_ledger(payloads: &[String]) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::new();
    for payload in payloads {
        ledger
            .append(payload)
            .with_context(|| format!("cannot append payload {payload:?}"))?;
    }
    Ok(ledger)
}

fn print_record(record: &Record) {
    println!(
        "{}  {}  {}",
        record.digest().to_hex().yellow(),
        format!("{}", record.timestamp()).dimmed(),
        record.payload()
    );
}

fn cmd_print(args: PrintArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let ledger = build_ledger(&args.payloads)?;
    match format {
        OutputFormat::Json => {
            let records: Vec<&Record> = ledger.iter().collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            for record in &ledger {
                print_record(record);
            }
            println!("{} records", ledger.len().to_string().bold());
        }
    }
    Ok(())
}

fn cmd_search(args: SearchArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let target = PayloadDigest::from_hex(&args.target)
        .with_context(|| format!("invalid target digest {:?}", args.target))?;
    let ledger = build_ledger(&args.payloads)?;

    match ledger.search(&target) {
        Some(record) => match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
            OutputFormat::Text => {
                println!("{} found", "✓".green().bold());
                print_record(record);
            }
        },
        None => {
            println!("{} no record with digest {}", "✗".red(), target.short_hex());
        }
    }
    Ok(())
}

fn cmd_digest(args: DigestArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let digest = PayloadDigest::of_bytes(args.payload.as_bytes());
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&digest.to_hex())?),
        OutputFormat::Text => println!("{}", digest.to_hex()),
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let ledger = build_ledger(&args.payloads)?;
    let report = ChainValidator::validate(&ledger);

    if report.is_valid() {
        println!(
            "{} chain intact: {} records",
            "✓".green().bold(),
            report.record_count.to_string().bold()
        );
        Ok(())
    } else {
        for violation in &report.violations {
            println!(
                "{} record {}: {}",
                "✗".red().bold(),
                violation.index.to_string().yellow(),
                violation.description
            );
        }
        anyhow::bail!("chain integrity check failed");
    }
}
