// CNIC extraction demo CLI.
// Feeds OCR region texts (one per line) through the field reconciler and
// prints the reconciled record or the validation diagnostic.

use clap::Parser;
use cnic_extract::{CnicRecord, CnicReconciler, ReconcileMode, ValidationOutcome};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "cnic-extract",
    about = "Reconcile OCR region texts into structured CNIC fields"
)]
struct Args {
    /// File with one OCR region text per line, or '-' for stdin
    input: PathBuf,

    /// Reject incomplete or malformed records instead of returning best effort
    #[arg(long)]
    strict: bool,

    /// Emit the record as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn read_regions(path: &PathBuf) -> std::io::Result<Vec<String>> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(raw.lines().map(|line| line.to_string()).collect())
}

fn print_report(record: &CnicRecord) {
    let shown = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    println!("\n===============================================");
    println!("           CNIC EXTRACTION REPORT");
    println!("===============================================\n");
    println!("  Name:             {}", shown(&record.name));
    println!("  Father's Name:    {}", shown(&record.father_name));
    println!("  Gender:           {}", shown(&record.gender));
    println!("  Country of Stay:  {}", shown(&record.country_of_stay));
    println!("  Identity Number:  {}", shown(&record.identity_number));
    println!("  Date of Birth:    {}", shown(&record.date_of_birth));
    println!("  Date of Issue:    {}", shown(&record.date_of_issue));
    println!("  Date of Expiry:   {}", shown(&record.date_of_expiry));
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let regions = match read_regions(&args.input) {
        Ok(regions) => regions,
        Err(err) => {
            eprintln!("Error reading input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let mode = if args.strict {
        ReconcileMode::Strict
    } else {
        ReconcileMode::Lenient
    };

    match CnicReconciler::new(mode).reconcile(&regions) {
        ValidationOutcome::Valid(record) => {
            if args.json {
                match serde_json::to_string_pretty(&record) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error serializing record: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&record);
            }
            ExitCode::SUCCESS
        }
        ValidationOutcome::Invalid(diagnostic) => {
            eprintln!("Validation failed: {}", diagnostic);
            ExitCode::FAILURE
        }
    }
}
