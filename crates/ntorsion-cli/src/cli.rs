use clap::{Args, Parser, Subcommand, ValueEnum};
use ntorsion::core::io::report::ReportFormat;
use ntorsion::core::io::rings::DEFAULT_TITLE;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pdb-torsion",
    author = "ntorsion developers",
    version,
    about = "Computes nucleic-acid backbone (alpha-zeta) and glycosidic (chi) torsion angles from PDB ATOM records.",
    help_template = HELP_TEMPLATE,
    subcommand_negates_reqs = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub analyze: AnalyzeArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the concentric torsion-ring plot of an existing torsion report as SVG.
    Rings(RingsArgs),
}

/// Input, output and report options of a torsion analysis run.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "PDB_FILE", required = true)]
    pub pdb_file: Option<PathBuf>,

    /// Path for the torsion report. Defaults to torsion_angles.dat.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report format, overriding the config file.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Add a nucleotide-type column after the residue number.
    #[arg(long)]
    pub with_residue_type: bool,

    /// Stop reading after this many ATOM records, overriding the config file.
    #[arg(long, value_name = "INT")]
    pub max_atoms: Option<usize>,

    /// Also draw the torsion rings of the computed table to this SVG file.
    #[arg(long, value_name = "SVG")]
    pub rings: Option<PathBuf>,
}

/// Arguments for the `rings` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RingsArgs {
    /// Torsion report written by an earlier run, with or without the type column.
    #[arg(value_name = "REPORT_FILE")]
    pub report_file: PathBuf,

    /// Path for the SVG plot.
    #[arg(short, long, value_name = "PATH", default_value = "rings.svg")]
    pub output: PathBuf,

    /// Title drawn above the rings.
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Fixed-width text table.
    Table,
    /// Comma-separated values with chain and residue name columns.
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => ReportFormat::Table,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_paths() {
        let cli = Cli::try_parse_from(["pdb-torsion", "rna.pdb", "out.dat"]).unwrap();
        assert_eq!(cli.analyze.pdb_file, Some(PathBuf::from("rna.pdb")));
        assert!(cli.command.is_none());
        assert_eq!(cli.analyze.output_file, Some(PathBuf::from("out.dat")));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn output_file_is_optional() {
        let cli = Cli::try_parse_from(["pdb-torsion", "rna.pdb"]).unwrap();
        assert_eq!(cli.analyze.output_file, None);
        assert_eq!(cli.analyze.format, None);
        assert!(!cli.analyze.with_residue_type);
        assert_eq!(cli.analyze.rings, None);
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        let err = Cli::try_parse_from(["pdb-torsion"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_report_and_runtime_flags() {
        let cli = Cli::try_parse_from([
            "pdb-torsion",
            "-vv",
            "-j",
            "4",
            "--format",
            "csv",
            "--with-residue-type",
            "--max-atoms",
            "500",
            "--rings",
            "rings.svg",
            "rna.pdb",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(4));
        assert_eq!(cli.analyze.format, Some(FormatArg::Csv));
        assert!(cli.analyze.with_residue_type);
        assert_eq!(cli.analyze.max_atoms, Some(500));
        assert_eq!(cli.analyze.rings, Some(PathBuf::from("rings.svg")));
    }

    #[test]
    fn rings_subcommand_needs_no_pdb_file() {
        let cli = Cli::try_parse_from(["pdb-torsion", "rings", "torsion_angles.dat"]).unwrap();

        assert_eq!(cli.analyze.pdb_file, None);
        let Some(Commands::Rings(args)) = cli.command else {
            panic!("expected the rings subcommand");
        };
        assert_eq!(args.report_file, PathBuf::from("torsion_angles.dat"));
        assert_eq!(args.output, PathBuf::from("rings.svg"));
        assert_eq!(args.title, DEFAULT_TITLE);
    }

    #[test]
    fn rings_subcommand_accepts_output_title_and_global_flags() {
        let cli = Cli::try_parse_from([
            "pdb-torsion",
            "rings",
            "angles.dat",
            "-o",
            "plot.svg",
            "-t",
            "Chain A",
            "-q",
        ])
        .unwrap();

        assert!(cli.quiet);
        let Some(Commands::Rings(args)) = cli.command else {
            panic!("expected the rings subcommand");
        };
        assert_eq!(args.output, PathBuf::from("plot.svg"));
        assert_eq!(args.title, "Chain A");
    }

    #[test]
    fn rings_subcommand_requires_a_report() {
        let err = Cli::try_parse_from(["pdb-torsion", "rings"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["pdb-torsion", "-q", "-v", "rna.pdb"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_arg_maps_to_report_format() {
        assert_eq!(ReportFormat::from(FormatArg::Table), ReportFormat::Table);
        assert_eq!(ReportFormat::from(FormatArg::Csv), ReportFormat::Csv);
    }
}
