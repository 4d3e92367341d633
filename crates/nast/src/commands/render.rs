//! `nast render` command implementation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Args;
use nast_config::{CliSettings, Config, MissingChildren};
use nast_renderer::HtmlRenderer;
use nast_transform::{Assembler, MissingChildPolicy};
use nast_types::Warning;
use rayon::prelude::*;

use super::{Dump, missing_child_policy};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Record dump files (default: input.records from config).
    files: Vec<PathBuf>,

    /// Root block id (default: the page whose parent is not in the dump).
    #[arg(short, long)]
    root: Option<String>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Write complete HTML documents instead of fragments.
    #[arg(long)]
    standalone: bool,

    /// Fail when a declared child has no record.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover nast.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// A rendered file and everything reported while producing it.
struct Rendered {
    target: PathBuf,
    warnings: Vec<Warning>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            root_id: self.root.clone(),
            out_dir: self.out_dir.clone(),
            standalone: self.standalone.then_some(true),
            missing_children: self.strict.then_some(MissingChildren::Fail),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let files = if self.files.is_empty() {
            config.input_resolved.records.iter().cloned().collect()
        } else {
            self.files
        };
        if files.is_empty() {
            return Err(CliError::Validation(
                "no record dump given, pass FILES or set input.records".to_owned(),
            ));
        }

        let out_dir = &config.output_resolved.dir;
        std::fs::create_dir_all(out_dir)?;
        output.status("output", &out_dir.display());

        let renderer = HtmlRenderer::new()
            .with_default_color(config.render.default_color.clone())
            .with_standalone(config.output_resolved.standalone);
        let policy = missing_child_policy(config.assemble.missing_children);
        let root = config.input_resolved.root_id.as_deref();

        let reports: Vec<(&PathBuf, Result<Rendered, CliError>)> = files
            .par_iter()
            .map(|path| (path, render_file(path, root, policy, &renderer, out_dir)))
            .collect();

        let mut failed = 0;
        for (path, report) in &reports {
            match report {
                Ok(rendered) => {
                    for warning in &rendered.warnings {
                        output.warning(path, warning);
                    }
                    output.rendered(path, &rendered.target);
                }
                Err(err) => {
                    failed += 1;
                    output.failed(path, err);
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Validation(format!(
                "{failed} of {} files failed",
                reports.len()
            )));
        }
        Ok(())
    }
}

/// Assemble and render one dump into `out_dir`.
fn render_file(
    path: &Path,
    root: Option<&str>,
    policy: MissingChildPolicy,
    renderer: &HtmlRenderer,
    out_dir: &Path,
) -> Result<Rendered, CliError> {
    let dump = Dump::load(path)?;
    let root_id = dump.root_id(root)?;
    let assembled = Assembler::new(&dump.records, &dump.children)
        .with_missing_child_policy(policy)
        .assemble(&root_id)?;
    let result = renderer.render(&assembled.root);

    let target = out_dir.join(output_name(path));
    std::fs::write(&target, &result.html)?;
    tracing::info!(
        path = %path.display(),
        target = %target.display(),
        nodes = assembled.root.count(),
        "Rendered page"
    );

    let mut warnings = assembled.warnings;
    warnings.extend(result.warnings);
    Ok(Rendered { target, warnings })
}

/// `<stem>.html` for a dump file.
fn output_name(path: &Path) -> OsString {
    let mut name = path
        .file_stem()
        .map_or_else(|| OsString::from("page"), ToOwned::to_owned);
    name.push(".html");
    name
}
