//! Command execution implementations

use super::Commands;
use super::{batch, convert, inspect};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                output,
                compact,
                config,
            } => convert::execute(source, output.as_deref(), *compact, config.as_deref()),
            Commands::Batch {
                source,
                destination,
                config,
                quiet,
            } => batch::execute(source, destination.as_deref(), config.as_deref(), *quiet),
            Commands::Inspect {
                source,
                missing,
                config,
            } => inspect::execute(source, *missing, config.as_deref()),
        }
    }
}
