use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the unofficialize tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to the plugin project root (contains bin/x64/Release/...)
    pub project_path: PathBuf,

    /// Internal name of the plugin, used to derive all per-plugin filenames
    pub internal_name: String,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("unofficialize")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Derives an unofficial build archive from an official plugin release")
            .arg(
                Arg::new("project-path")
                    .value_name("PROJECT_PATH")
                    .required(true)
                    .help("Path to the plugin project root containing the build output tree")
            )
            .arg(
                Arg::new("internal-name")
                    .value_name("INTERNAL_NAME")
                    .required(true)
                    .help("Internal name of the plugin (matches the archive entries and manifest file)")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            // both are declared required, so clap guarantees presence
            project_path: matches
                .get_one::<String>("project-path")
                .map(PathBuf::from)
                .expect("required"),
            internal_name: matches
                .get_one::<String>("internal-name")
                .cloned()
                .expect("required"),
        }
    }
}
