use std::path::PathBuf;

use clap::Parser;

/// Text-mode admin console for flight records
///
/// Flightdesk opens a SQLite flight database and runs an interactive menu for
/// listing, adding, updating and deleting flights. Airlines and aircraft are
/// read from reference tables in the same database.
#[derive(Parser)]
#[command(version, about, name = "flightdesk")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/flightdesk/flightdesk.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Fill empty airline and aircraft tables with a small demo set
    #[arg(long)]
    pub seed_demo: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["flightdesk", "--database-file", "/tmp/f.db", "--seed-demo"]);
        assert_eq!(args.database_file, Some(PathBuf::from("/tmp/f.db")));
        assert!(args.seed_demo);

        let args = Args::parse_from(["flightdesk"]);
        assert!(args.database_file.is_none());
        assert!(!args.seed_demo);
    }
}
