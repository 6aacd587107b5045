use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "xyzsort",
    version,
    about = "Reorder the atoms of an XYZ file to follow the atom order of a template XYZ file.",
    long_about = "Reorder the atoms of an XYZ file to follow the atom order of a template XYZ file.\n\n\
        Every template atom is paired with the nearest source atom of the same species. \
        The matching is greedy and only suitable for small structures with small displacements; \
        if two template atoms settle on the same source atom the run is aborted.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the XYZ file that needs sorting.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the XYZ file whose atom order serves as the template.
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path of the reordered XYZ file to be written.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Warn about matched atom pairs farther apart than this distance.
    /// Overrides `matching.warn-distance` from the config file.
    #[arg(short = 'w', long, value_name = "FLOAT")]
    pub warn_distance: Option<f64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
