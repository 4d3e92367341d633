//! `nast tree` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use nast_config::{CliSettings, Config};
use nast_transform::Assembler;

use super::{Dump, missing_child_policy};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Record dump file (default: input.records from config).
    file: Option<PathBuf>,

    /// Root block id (default: the page whose parent is not in the dump).
    #[arg(short, long)]
    root: Option<String>,

    /// Path to configuration file (default: auto-discover nast.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            records: self.file,
            root_id: self.root,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let path = config.input_resolved.records.as_deref().ok_or_else(|| {
            CliError::Validation("no record dump given, pass FILE or set input.records".to_owned())
        })?;

        let dump = Dump::load(path)?;
        let root_id = dump.root_id(config.input_resolved.root_id.as_deref())?;
        let assembled = Assembler::new(&dump.records, &dump.children)
            .with_missing_child_policy(missing_child_policy(config.assemble.missing_children))
            .assemble(&root_id)?;

        for warning in &assembled.warnings {
            output.warning(path, warning);
        }

        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &assembled.root)?;
        writeln!(stdout)?;
        Ok(())
    }
}
