use crate::input::Prompter;
use crate::model::AuditReport;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "fuel-tracker",
    version,
    about = "Weekly fuel expense and efficiency audit for delivery drivers"
)]
pub struct Cli {
    /// Print the audit report as JSON (prompts go to stderr)
    #[arg(long)]
    pub json: bool,

    /// Re-prompt on malformed numbers instead of aborting the session
    #[arg(long)]
    pub retry_invalid: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run(args: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if args.json {
        let stderr = std::io::stderr();
        let report = collect(stdin.lock(), stderr.lock(), args.retry_invalid)?;
        let mut out = stdout.lock();
        write_json(&mut out, &report)?;
        return Ok(());
    }

    let mut out = stdout.lock();
    let report = collect(stdin.lock(), &mut out, args.retry_invalid)?;
    write_text(&mut out, &report)
}

fn collect<R: BufRead, W: Write>(
    reader: R,
    prompts: W,
    retry_invalid: bool,
) -> Result<AuditReport> {
    let mut prompter = Prompter::new(reader, prompts, retry_invalid);
    crate::session::collect_report(&mut prompter).context("fuel session aborted")
}

fn write_text<W: Write>(out: &mut W, report: &AuditReport) -> Result<()> {
    let summary = crate::text_summary::build_text_summary(report);
    for line in summary.lines {
        writeln!(out, "{line}").context("write audit report")?;
    }
    out.flush().context("flush audit report")?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &AuditReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json}").context("write audit report")?;
    out.flush().context("flush audit report")?;
    Ok(())
}
