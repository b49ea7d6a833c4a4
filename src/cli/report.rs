//! Report formatting and printing utilities.
//!
//! Summaries go to stdout, warnings and notes to stderr. Separate from core
//! logic to allow potgen to be used as a library.

use std::{
    env,
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary, RunStats,
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::{Message, TemplateDiff},
    utils::plural,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to any value to leave the elapsed time out of summaries.
pub const DISABLE_TIMING_ENV: &str = "POTGEN_DISABLE_TIMING";

/// Print the progress line shown before extraction starts.
pub fn print_progress(output: &str) {
    print_progress_to(output, &mut io::stdout().lock());
}

/// Print the progress line to a custom writer.
pub fn print_progress_to<W: Write>(output: &str, writer: &mut W) {
    let _ = writeln!(writer, "Updating {} template...", output);
}

/// Print the outcome of a command to stdout and stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        timing_enabled(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print the outcome of a command to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    timing: bool,
    out: &mut O,
    err: &mut E,
) {
    print_warnings(&result.warnings, err);
    if verbose {
        print_notes(&result.notes, err);
    }

    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, out),
        CommandSummary::Check(summary) => print_check(summary, verbose, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }

    if timing && !matches!(result.summary, CommandSummary::Init(_)) {
        print_elapsed(result.elapsed, out);
    }
}

fn timing_enabled() -> bool {
    env::var_os(DISABLE_TIMING_ENV).is_none()
}

// ============================================================
// Internal Functions
// ============================================================

fn print_warnings<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

fn print_notes<W: Write>(notes: &[String], writer: &mut W) {
    for note in notes {
        let _ = writeln!(writer, "{} {}", "note:".bold().cyan(), note);
    }
}

fn print_stats<W: Write>(stats: &RunStats, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} ({} {}) from {} source {}",
            stats.messages,
            plural(stats.messages, "message", "messages"),
            stats.locations,
            plural(stats.locations, "reference", "references"),
            stats.files_scanned,
            plural(stats.files_scanned, "file", "files"),
        )
        .green()
    );

    if verbose {
        let _ = writeln!(
            writer,
            "  {} {}, {} {} loaded, {} {} ignored",
            stats.occurrences,
            plural(stats.occurrences, "occurrence", "occurrences"),
            stats.remap_entries,
            plural(stats.remap_entries, "remap", "remaps"),
            stats.files_ignored,
            plural(stats.files_ignored, "file", "files"),
        );
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    print_stats(&summary.stats, verbose, writer);

    let output = &summary.stats.output;
    if !summary.had_previous {
        let _ = writeln!(writer, "Created {}", output);
    } else if summary.unchanged {
        let _ = writeln!(writer, "{} is already up to date", output);
    } else {
        let _ = writeln!(
            writer,
            "Updated {}: {}",
            output,
            diff_counts(&summary.diff)
        );
    }

    if verbose && summary.had_previous {
        print_diff(&summary.diff, writer);
    }
}

fn print_check<W: Write>(summary: &CheckSummary, verbose: bool, writer: &mut W) {
    print_stats(&summary.stats, verbose, writer);

    let output = &summary.stats.output;
    if !summary.stale {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} is up to date", output).green()
        );
        return;
    }

    let reason = if summary.had_previous {
        format!("{} is out of date: {}", output, diff_counts(&summary.diff))
    } else {
        format!("{} does not exist", output)
    };
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), reason.red());

    if verbose {
        print_diff(&summary.diff, writer);
    }
    let _ = writeln!(
        writer,
        "  {} {} {}",
        "=".blue(),
        "hint:".bold().cyan(),
        "run `potgen extract` to regenerate it"
    );
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn print_diff<W: Write>(diff: &TemplateDiff, writer: &mut W) {
    for message in &diff.added {
        let _ = writeln!(writer, "  {} {}", "+".green(), describe(message));
    }
    for message in &diff.removed {
        let _ = writeln!(writer, "  {} {}", "-".red(), describe(message));
    }
}

fn print_elapsed<W: Write>(elapsed: Duration, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}",
        format!("Finished in {:.2}s", elapsed.as_secs_f64()).dimmed()
    );
}

fn diff_counts(diff: &TemplateDiff) -> String {
    let added = diff.added.len();
    let removed = diff.removed.len();
    if added == 0 && removed == 0 {
        return "references or comments changed".to_string();
    }
    format!(
        "{} {} added, {} removed",
        added,
        plural(added, "message", "messages"),
        removed
    )
}

fn describe(message: &Message) -> String {
    match &message.context {
        Some(context) => format!("\"{}\" [{}]", message.text, context),
        None => format!("\"{}\"", message.text),
    }
}
