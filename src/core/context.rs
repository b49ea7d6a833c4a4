use std::{fs, path::PathBuf};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        catalog::{Catalog, TemplateDiff, parse_template_keys, render_catalog},
        extract::Extractor,
        file_scanner::scan_files,
        remap::RemapTable,
    },
};

/// Configuration and paths for one extraction run.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g., `--output`, `--with-line-nb`)
/// 2. `.potgenrc.json` found from the root upwards
/// 3. Built-in defaults
pub struct ExtractContext {
    /// Merged configuration.
    pub config: Config,
    /// Repository root; locations are recorded relative to it.
    pub root_dir: PathBuf,
    /// True if a config file was found.
    pub config_from_file: bool,
    pub verbose: bool,
}

/// Everything one run produced, before anything is written.
pub struct Extraction {
    pub catalog: Catalog,
    /// Rendered template text.
    pub document: String,
    pub files_scanned: usize,
    /// Messages matched across all files, duplicates included.
    pub occurrences: usize,
    /// Files skipped by `ignores` patterns.
    pub files_ignored: usize,
    /// Number of entries in the remap table.
    pub remap_entries: usize,
    /// Remap source lines that mention the table but could not be parsed.
    pub remap_skipped_lines: Vec<usize>,
    /// Non-fatal problems worth showing to the user.
    pub warnings: Vec<String>,
}

impl ExtractContext {
    /// Resolve the root, load the config and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the root is not a directory or the config file is
    /// invalid.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        if !args.root.is_dir() {
            bail!(
                "Root directory does not exist or is not a directory: {}",
                args.root.display()
            );
        }
        let root_dir = args
            .root
            .canonicalize()
            .with_context(|| format!("Failed to resolve root directory: {}", args.root.display()))?;

        let loaded = load_config(&root_dir)?;
        let mut config = loaded.config;

        if let Some(output) = &args.output {
            config.output = output.to_string_lossy().into_owned();
        }
        if args.line_numbers {
            config.line_numbers = true;
        }
        if args.no_wrap {
            config.wrap_width = 0;
        }
        config.validate()?;

        Ok(Self {
            config,
            root_dir,
            config_from_file: loaded.from_file,
            verbose: args.verbose,
        })
    }

    /// Template path, resolved against the root.
    pub fn output_path(&self) -> PathBuf {
        self.root_dir.join(&self.config.output)
    }

    /// Scan the tree, extract every file and render the template.
    ///
    /// Any traversal or read error aborts the run.
    pub fn run(&self) -> Result<Extraction> {
        let config = &self.config;
        let scan = scan_files(
            &self.root_dir,
            &config.extensions,
            &config.excluded_dirs,
            &config.ignores,
        )?;

        let mut warnings = Vec::new();

        let remap = RemapTable::load(
            &self.root_dir.join(&config.remap_source),
            &config.remap_table,
        );
        if let Some(error) = &remap.read_error {
            warnings.push(format!(
                "Remap table not loaded ({}); property names use generic capitalization",
                error
            ));
        }

        let extractor = Extractor::new(&remap.table, config.line_numbers);
        let mut catalog = Catalog::new();
        let files_scanned = scan.files.len();
        let files_ignored = scan.ignored_count;
        let mut occurrences = 0;

        for file in scan {
            let path = self.root_dir.join(&file);
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;
            occurrences += extractor.extract_file(&file, &source, &mut catalog).occurrences;
        }

        warnings.extend(catalog.anomalies().iter().cloned());

        let document = render_catalog(&catalog, &config.header, config.wrap());

        Ok(Extraction {
            catalog,
            document,
            files_scanned,
            occurrences,
            files_ignored,
            remap_entries: remap.table.len(),
            remap_skipped_lines: remap.skipped_lines,
            warnings,
        })
    }

    /// Contents of the template currently on disk, if there is one.
    pub fn read_previous(&self) -> Result<Option<String>> {
        let path = self.output_path();
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read existing template: {}", path.display()))
    }

    /// Write the rendered template, creating parent directories as needed.
    pub fn write_template(&self, document: &str) -> Result<PathBuf> {
        let path = self.output_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, document)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        Ok(path)
    }
}

impl Extraction {
    /// Messages added and removed relative to `previous` template text.
    pub fn diff_against(&self, previous: Option<&str>) -> TemplateDiff {
        let keys = previous.map(parse_template_keys).unwrap_or_default();
        TemplateDiff::between(&keys, &self.catalog)
    }
}
