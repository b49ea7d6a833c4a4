use std::time::Instant;

use anyhow::Result;

use super::super::{args::ExtractCommand, report};
use super::{CommandKind, CommandResult, CommandSummary, ExtractSummary, RunStats};
use crate::core::{ExtractContext, Extraction};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let start = Instant::now();
    let ctx = ExtractContext::new(&cmd.common)?;

    report::print_progress(&ctx.config.output);

    let extraction = ctx.run()?;
    let previous = ctx.read_previous()?;
    let diff = extraction.diff_against(previous.as_deref());
    let unchanged = previous.as_deref() == Some(extraction.document.as_str());

    if !unchanged {
        ctx.write_template(&extraction.document)?;
    }

    let stats = run_stats(&ctx, &extraction);
    let notes = remap_notes(&ctx, &extraction);

    Ok(CommandResult {
        kind: CommandKind::Extract,
        summary: CommandSummary::Extract(ExtractSummary {
            stats,
            diff,
            had_previous: previous.is_some(),
            unchanged,
        }),
        warnings: extraction.warnings,
        notes,
        elapsed: start.elapsed(),
    })
}

pub(super) fn run_stats(ctx: &ExtractContext, extraction: &Extraction) -> RunStats {
    RunStats {
        output: ctx.config.output.clone(),
        files_scanned: extraction.files_scanned,
        files_ignored: extraction.files_ignored,
        occurrences: extraction.occurrences,
        messages: extraction.catalog.len(),
        locations: extraction.catalog.location_count(),
        remap_entries: extraction.remap_entries,
    }
}

/// Verbose-only lines about the remap source.
pub(super) fn remap_notes(ctx: &ExtractContext, extraction: &Extraction) -> Vec<String> {
    extraction
        .remap_skipped_lines
        .iter()
        .map(|line| {
            format!(
                "{}:{}: remap entry not recognised, skipped",
                ctx.config.remap_source, line
            )
        })
        .collect()
}
