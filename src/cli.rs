//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

/// Generates the tab-bar PNG icon set (normal and active variants)
#[derive(Debug, Parser)]
#[command(name = "tabicons", version, about)]
pub struct Cli {
    /// Directory to write the generated PNG files into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const WRITE_FAILURE: i32 = 1;
    pub const UNEXPECTED_FAILURE: i32 = 70;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dir() {
        let cli = Cli::parse_from(["tabicons"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_output_dir_flag() {
        let cli = Cli::parse_from(["tabicons", "-o", "assets/icons", "--verbose"]);
        assert_eq!(cli.output_dir, PathBuf::from("assets/icons"));
        assert!(cli.verbose);
    }
}
