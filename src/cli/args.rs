//! Command-line argument parsing and validation

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
  -------------------  --------------------------------------------------
  List table content        : mod_storage
  Insert an entry           : mod_storage -m \"modname\" -k \"key\" -v \"value\" insert
  Delete an entry           : mod_storage -m \"modname\" -k \"key\" delete
  Delete all MODNAME entries: mod_storage -m \"modname\" delete
  Delete all KEY entries    : mod_storage -k \"key\" delete

Option defaults may also be supplied through the MOD_STORAGE_DATABASE,
MOD_STORAGE_MODNAME, MOD_STORAGE_KEY and MOD_STORAGE_VALUE environment
variables.";

/// Luanti mod storage management - inspect and mutate a mod_storage database
#[derive(Parser, Debug)]
#[command(name = "mod_storage", version, about, long_about = None)]
#[command(disable_help_flag = true, after_help = AFTER_HELP)]
pub struct Args {
    /// Database file to operate on
    #[arg(short = 'd', long = "database", visible_alias = "db", value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Mod owning the entries
    #[arg(short = 'm', long = "modname", visible_alias = "mod", value_name = "MODNAME")]
    pub modname: Option<String>,

    /// Entry key, encoded to bytes as UTF-8
    #[arg(short = 'k', long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Entry value, encoded to bytes as UTF-8
    #[arg(short = 'v', long = "value", visible_alias = "val", value_name = "VALUE")]
    pub value: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print help
    #[arg(short = '?', short_alias = 'h', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Operation to perform on the entries table
    #[arg(value_enum, value_name = "OPERATION", default_value = "view")]
    pub operation: Operation,
}

/// Available operations
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// List every entry in the table
    View,
    /// Insert a single entry
    Insert,
    /// Delete entries by modname, key, or both
    Delete,
}

/// Parse command line arguments
///
/// Maps clap's outcomes onto the tool's exit-code contract: help and version
/// requests exit 0, any syntax error prints usage and exits 1.
pub fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    }
}

/// Print usage and the operation examples to stderr
pub fn print_usage() {
    let mut cmd = Args::command();
    eprint!("{}", cmd.render_help());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["mod_storage"]).unwrap();
        assert!(args.database.is_none());
        assert!(args.modname.is_none());
        assert!(args.key.is_none());
        assert!(args.value.is_none());
        assert!(!args.debug);
        assert_eq!(args.operation, Operation::View);
    }

    #[test]
    fn test_parse_short_options() {
        let args = Args::try_parse_from([
            "mod_storage",
            "-d",
            "other.sqlite",
            "-m",
            "mod_a",
            "-k",
            "k1",
            "-v",
            "v1",
            "insert",
        ])
        .unwrap();
        assert_eq!(args.database, Some(PathBuf::from("other.sqlite")));
        assert_eq!(args.modname.as_deref(), Some("mod_a"));
        assert_eq!(args.key.as_deref(), Some("k1"));
        assert_eq!(args.value.as_deref(), Some("v1"));
        assert_eq!(args.operation, Operation::Insert);
    }

    #[test]
    fn test_parse_long_aliases() {
        let args = Args::try_parse_from([
            "mod_storage",
            "--db",
            "other.sqlite",
            "--mod",
            "mod_a",
            "--val",
            "v1",
        ])
        .unwrap();
        assert_eq!(args.database, Some(PathBuf::from("other.sqlite")));
        assert_eq!(args.modname.as_deref(), Some("mod_a"));
        assert_eq!(args.value.as_deref(), Some("v1"));
    }

    #[test]
    fn test_parse_delete_operation() {
        let args = Args::try_parse_from(["mod_storage", "-m", "mod_a", "delete"]).unwrap();
        assert_eq!(args.operation, Operation::Delete);
    }

    #[test]
    fn test_operation_after_separator() {
        let args = Args::try_parse_from(["mod_storage", "--", "view"]).unwrap();
        assert_eq!(args.operation, Operation::View);
    }

    #[test]
    fn test_unknown_option_is_error() {
        assert!(Args::try_parse_from(["mod_storage", "--bogus"]).is_err());
    }

    #[test]
    fn test_excess_positional_is_error() {
        assert!(Args::try_parse_from(["mod_storage", "view", "extra"]).is_err());
    }

    #[test]
    fn test_unknown_operation_is_error() {
        assert!(Args::try_parse_from(["mod_storage", "update"]).is_err());
    }
}
