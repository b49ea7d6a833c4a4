use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::catalog::{CatalogHeader, HeaderSource};

pub const CONFIG_FILE_NAME: &str = ".potgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_remap_source")]
    pub remap_source: String,
    #[serde(default = "default_remap_table")]
    pub remap_table: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default)]
    pub line_numbers: bool,
    #[serde(default)]
    pub header: HeaderConfig,
}

/// Static project metadata written into the template header.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_copyright")]
    pub copyright: Vec<String>,
    #[serde(default = "default_license_notice")]
    pub license_notice: String,
    #[serde(default = "default_project_id_version")]
    pub project_id_version: String,
    #[serde(default = "default_report_msgid_bugs_to")]
    pub report_msgid_bugs_to: String,
}

fn default_extensions() -> Vec<String> {
    ["cpp", "h"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["thirdparty".to_string()]
}

fn default_remap_source() -> String {
    "editor/editor_property_name_processor.cpp".to_string()
}

fn default_remap_table() -> String {
    "capitalize_string_remaps".to_string()
}

fn default_output() -> String {
    "editor/translations/editor.pot".to_string()
}

fn default_wrap_width() -> usize {
    79
}

fn default_title() -> String {
    "LANGUAGE translation of the Godot Engine editor.".to_string()
}

fn default_copyright() -> Vec<String> {
    [
        "Copyright (c) 2007-2022 Juan Linietsky, Ariel Manzur.",
        "Copyright (c) 2014-2022 Godot Engine contributors (cf. AUTHORS.md).",
    ]
    .map(String::from)
    .to_vec()
}

fn default_license_notice() -> String {
    "This file is distributed under the same license as the Godot source code.".to_string()
}

fn default_project_id_version() -> String {
    "Godot Engine editor".to_string()
}

fn default_report_msgid_bugs_to() -> String {
    "https://github.com/godotengine/godot".to_string()
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            copyright: default_copyright(),
            license_notice: default_license_notice(),
            project_id_version: default_project_id_version(),
            report_msgid_bugs_to: default_report_msgid_bugs_to(),
        }
    }
}

impl HeaderSource for HeaderConfig {
    fn header(&self) -> CatalogHeader {
        CatalogHeader {
            title: self.title.clone(),
            copyright: self.copyright.clone(),
            license_notice: self.license_notice.clone(),
            project_id_version: self.project_id_version.clone(),
            report_msgid_bugs_to: self.report_msgid_bugs_to.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            remap_source: default_remap_source(),
            remap_table: default_remap_table(),
            output: default_output(),
            wrap_width: default_wrap_width(),
            line_numbers: false,
            header: HeaderConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }

        if self.remap_table.trim().is_empty() {
            bail!("'remapTable' must not be empty");
        }

        Ok(())
    }

    /// Wrap width for the rendered template, `None` when wrapping is disabled.
    pub fn wrap(&self) -> Option<usize> {
        (self.wrap_width > 0).then_some(self.wrap_width)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
