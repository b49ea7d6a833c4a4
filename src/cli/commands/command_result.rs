use std::time::Duration;

use crate::{cli::ExitStatus, core::TemplateDiff};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Extract,
    Check,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Figures shared by `extract` and `check`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Template path as configured, relative to the root.
    pub output: String,
    pub files_scanned: usize,
    pub files_ignored: usize,
    /// Matched messages before deduplication.
    pub occurrences: usize,
    pub messages: usize,
    pub locations: usize,
    pub remap_entries: usize,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub stats: RunStats,
    /// Changes relative to the template that was on disk before writing.
    pub diff: TemplateDiff,
    /// False when no template existed yet.
    pub had_previous: bool,
    /// True when the written bytes equal the previous template.
    pub unchanged: bool,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub stats: RunStats,
    pub diff: TemplateDiff,
    /// False when no template exists at the output path.
    pub had_previous: bool,
    /// True when the template on disk differs from a fresh extraction.
    pub stale: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running potgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    /// Non-fatal problems, always shown.
    pub warnings: Vec<String>,
    /// Extra diagnostics shown only with `--verbose`.
    pub notes: Vec<String>,
    pub elapsed: Duration,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(_) => ExitStatus::Success,
            CommandSummary::Check(summary) if summary.stale => ExitStatus::Failure,
            CommandSummary::Check(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            CommandSummary::Init(_) => ExitStatus::Success,
        }
    }
}
