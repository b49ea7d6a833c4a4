use std::time::Instant;

use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandKind, CommandResult, CommandSummary,
    extract::{remap_notes, run_stats},
};
use crate::core::ExtractContext;

/// Extract without writing and compare against the template on disk.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let start = Instant::now();
    let ctx = ExtractContext::new(&cmd.common)?;

    let extraction = ctx.run()?;
    let previous = ctx.read_previous()?;
    let diff = extraction.diff_against(previous.as_deref());
    let stale = previous.as_deref() != Some(extraction.document.as_str());

    let stats = run_stats(&ctx, &extraction);
    let notes = remap_notes(&ctx, &extraction);

    Ok(CommandResult {
        kind: CommandKind::Check,
        summary: CommandSummary::Check(CheckSummary {
            stats,
            diff,
            had_previous: previous.is_some(),
            stale,
        }),
        warnings: extraction.warnings,
        notes,
        elapsed: start.elapsed(),
    })
}
