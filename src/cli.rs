use std::ffi::OsString;

use clap::{
    command, crate_authors, crate_description, crate_name, crate_version, Arg, ArgMatches, Command,
};

use crate::constants::{DEBUG_HELP, NO_OVERWRITE_HELP};
use crate::logging::LogLevel;
use crate::workflow::ProcessingOptions;

/// Options taken from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliOptions {
    /// Log down to debug level
    pub debug: bool,
    /// Replace output files that already exist
    pub overwrite: bool,
}

impl CliOptions {
    /// Reads the flags out of parsed arguments
    pub fn from_matches(matches: &ArgMatches) -> Self {
        CliOptions {
            debug: matches.get_flag("debug"),
            overwrite: !matches.get_flag("no_overwrite"),
        }
    }

    /// Gets the verbosity level requested on the command line
    pub fn verbosity(&self) -> LogLevel {
        LogLevel::from_debug_flag(self.debug)
    }

    /// Builds the run parameters: defaults everywhere except the overwrite policy
    pub fn processing_options(&self) -> ProcessingOptions {
        ProcessingOptions {
            overwrite: self.overwrite,
            ..ProcessingOptions::default()
        }
    }
}

/// Defines the command and its two flags
///
/// - `debug`: log everything down to debug level
/// - `no_overwrite`: leave existing output files alone
pub fn build_command() -> Command {
    let arg_debug = Arg::new("debug")
        .long("debug")
        .help(DEBUG_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_no_overwrite = Arg::new("no_overwrite")
        .long("no_overwrite")
        .help(NO_OVERWRITE_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_debug)
        .arg(arg_no_overwrite)
}

/// Parses the process arguments, exiting on `--help`, `--version` or misuse
pub fn get_options() -> CliOptions {
    CliOptions::from_matches(&build_command().get_matches())
}

/// Parses an explicit argument list; the first item is the program name
pub fn try_get_options_from<I, T>(args: I) -> Result<CliOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    Ok(CliOptions::from_matches(&matches))
}
