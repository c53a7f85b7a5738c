// Rust guideline compliant 2026-02-09

//! `jdki` CLI Application
//!
//! Command-line interface for searching, summarizing and reporting on JDK
//! bug-tracker issue exports.

use clap::Parser;
use jdkissue_app::AppError;
use jdkissue_cli::commands;
use jdkissue_cli::commands::report::ReportArgs;
use jdkissue_cli::commands::search::SearchArgs;
use jdkissue_cli::logging::init_tracing;
use jdkissue_cli::{create_formatter, should_use_color, OutputFormatter};
use jdkissue_core::config::CONFIG_FILE_NAME;
use jdkissue_core::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "jdki",
    version,
    about = "Search, summarize and report on JDK bug-tracker issues",
    long_about = "jdki reads JDK issue exports in the flat block format, answers id, keyword and filter queries, prints count summaries, renders an interactive HTML dashboard and builds release-note issue files from downloaded tracker XML.",
    after_help = "Examples:\n  jdki search -f jdk_OpenJDK21_0_6_Released.txt -p P2 -c hotspot\n  jdki search -f a.txt b.txt -s deadlock -v --stats\n  jdki search -f a.txt -i 8320192\n  jdki stats -f a.txt b.txt --merge\n  jdki report 21.0.6 21.0.7 -o report.html\n  jdki format release_ids.txt --apply-excludes 0\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search issues by id, keyword or field filters
    Search {
        /// Issue files to search
        #[arg(short = 'f', long = "files", num_args = 1..)]
        files: Vec<PathBuf>,

        /// Issue id (JDK- prefix optional)
        #[arg(short = 'i', long)]
        id: Option<String>,

        /// Keyword, matched case-insensitively
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        /// Fields searched by the keyword (default: title description component)
        #[arg(
            long,
            num_args = 1..,
            value_parser = ["id", "title", "priority", "type", "component", "description", "os"]
        )]
        search_fields: Vec<String>,

        /// Filter by priority
        #[arg(short = 'p', long)]
        priority: Option<String>,

        /// Filter by issue type
        #[arg(short = 't', long = "type")]
        issue_type: Option<String>,

        /// Filter by component
        #[arg(short = 'c', long)]
        component: Option<String>,

        /// Filter by OS
        #[arg(short = 'o', long)]
        os: Option<String>,

        /// Show per-issue details
        #[arg(short = 'v', long)]
        verbose: bool,

        /// Treat all files as one collection
        #[arg(short = 'm', long)]
        merge: bool,

        /// Print statistics over the results
        #[arg(long)]
        stats: bool,

        /// Group results
        #[arg(
            short = 'g',
            long,
            value_parser = ["priority", "type", "component", "os", "file"]
        )]
        group_by: Option<String>,

        /// Sort results
        #[arg(long, value_parser = ["priority", "type", "component", "os"])]
        sort: Option<String>,

        /// Maximum number of results
        #[arg(short = 'l', long)]
        limit: Option<usize>,
    },

    /// Print count summaries
    Stats {
        /// Issue files to summarize
        #[arg(short = 'f', long = "files", num_args = 1..)]
        files: Vec<PathBuf>,

        /// Summarize all files as one collection
        #[arg(short = 'm', long)]
        merge: bool,
    },

    /// Generate the interactive HTML report
    Report {
        /// Release versions, e.g. 21.0.6
        #[arg(required = true)]
        versions: Vec<String>,

        /// Issue files (default: one jdk_OpenJDK<version>_Released.txt per version)
        #[arg(short = 'f', long = "files", num_args = 1..)]
        files: Vec<PathBuf>,

        /// Directory holding the per-version issue files
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,

        /// Output HTML file
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// Report summary text
        #[arg(long)]
        summary: Option<String>,

        /// Rendering strategy
        #[arg(long, value_parser = ["template", "placeholder"])]
        strategy: Option<String>,

        /// Template file for the placeholder strategy
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Build a release-note issue file from downloaded tracker XML
    Format {
        /// Id list, one JDK-<digits> per line
        input: PathBuf,

        /// Directory with one sub-directory per downloaded issue
        #[arg(long)]
        issues_dir: Option<PathBuf>,

        /// Apply exclusion rules (1) or not (0)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
        apply_excludes: u8,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let requested = match (cli.format, cli.json) {
        (Some(format), _) => Some(OutputFormat::from(format)),
        (None, true) => Some(OutputFormat::Json),
        (None, false) => None,
    };
    let fallback = create_formatter(requested.unwrap_or_default(), use_color);

    if let Err(error) = init_tracing(&cli.log_level, cli.log_json) {
        return fail(fallback.as_ref(), &error);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => return fail(fallback.as_ref(), &error),
    };

    let format = requested.unwrap_or(config.output_format);
    let formatter = create_formatter(format, use_color);

    match run(cli.command, &config, formatter.as_ref(), format, use_color) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => fail(formatter.as_ref(), &error),
    }
}

fn fail(formatter: &dyn OutputFormatter, error: &anyhow::Error) -> ExitCode {
    tracing::debug!(error = %error, "command failed");
    eprintln!("{}", formatter.format_error(error));
    ExitCode::FAILURE
}

// An explicit path must exist; the default file is optional.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::from(jdkissue_core::Error::InputNotFound {
                    kind: "Config file",
                    path: path.to_path_buf(),
                })
                .into());
            }
            path.to_path_buf()
        }
        None => PathBuf::from(CONFIG_FILE_NAME),
    };
    Ok(Config::load(&path).map_err(AppError::from)?)
}

fn run(
    command: Option<Commands>,
    config: &Config,
    formatter: &dyn OutputFormatter,
    format: OutputFormat,
    use_color: bool,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Search {
            files,
            id,
            search,
            search_fields,
            priority,
            issue_type,
            component,
            os,
            verbose,
            merge,
            stats,
            group_by,
            sort,
            limit,
        }) => {
            let args = SearchArgs {
                files,
                id,
                keyword: search,
                search_fields,
                priority,
                issue_type,
                component,
                os,
                verbose,
                merge,
                stats,
                group_by,
                sort,
                limit,
            };
            commands::search::execute(args, config, formatter, use_color)?;
        }
        Some(Commands::Stats { files, merge }) => {
            commands::stats::execute(files, merge, config, formatter, use_color)?;
        }
        Some(Commands::Report {
            versions,
            files,
            data_dir,
            output,
            title,
            summary,
            strategy,
            template,
        }) => {
            let args = ReportArgs {
                versions,
                files,
                data_dir,
                output,
                title,
                summary,
                strategy,
                template,
            };
            commands::report::execute(args, config, formatter)?;
        }
        Some(Commands::Format {
            input,
            issues_dir,
            apply_excludes,
        }) => {
            commands::format::execute(
                input,
                issues_dir,
                apply_excludes == 1,
                config,
                formatter,
                format != OutputFormat::Json,
            )?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
