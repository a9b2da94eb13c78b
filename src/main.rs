use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vmaker::cli::commands;
use vmaker::cli::util::runtime;
use vmaker::constants::site::DEFAULT_MODULE_PATH;
use vmaker::site::ExportFormat;
use vmaker::{InitOptions, RenameStrategy};

#[derive(Parser)]
#[command(name = "vmaker")]
#[command(
    version,
    about = "A tutorial video maker for programmers. With the help of ffmpeg."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure the raw, clip and output directories
    Init {
        #[arg(long, help = "Directory the screen recorder writes to")]
        raw: PathBuf,
        #[arg(long, help = "Root directory of episode clip folders")]
        clip: PathBuf,
        #[arg(long, help = "Directory for finished videos")]
        output: PathBuf,
        #[arg(long, default_value = "", help = "Current episode folder under the clip dir")]
        current: String,
        #[arg(long, short, help = "Overwrite existing configuration")]
        force: bool,
    },

    /// Add the latest recorded video to the current clip directory
    Add {
        #[arg(help = "The new name of the video")]
        new_name: Option<String>,
        #[arg(long, conflicts_with_all = ["clip_info", "suffix"], help = "Rename to the recording time")]
        time: bool,
        #[arg(long, conflicts_with = "suffix", help = "Rename to <episode>_<NN>")]
        clip_info: bool,
        #[arg(long, help = "Append a suffix to the original name")]
        suffix: Option<String>,
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show source directory, destination directory and video output directory
    Dir,

    /// List videos in the current clip directory
    List {
        #[arg(long, help = "List raw recordings instead")]
        raw: bool,
        #[arg(long, help = "Probe durations with ffprobe")]
        probe: bool,
    },

    /// Start a new episode directory and make it current
    New {
        #[arg(help = "Episode directory name")]
        name: String,
    },

    /// Keep only the part between START and END
    Cut {
        input: PathBuf,
        #[arg(help = "Start time: SS, MM:SS or HH:MM:SS[.mmm]")]
        start: String,
        #[arg(help = "End time: SS, MM:SS or HH:MM:SS[.mmm]")]
        end: String,
        #[arg(long, short, help = "Output file (default: <name>_cut.<ext>)")]
        output: Option<PathBuf>,
    },

    /// Silence the audio track
    Mute {
        input: PathBuf,
        #[arg(long, short, help = "Output file (default: <name>_muted.<ext>)")]
        output: Option<PathBuf>,
    },

    /// Convert to the format implied by the output extension
    Convert {
        input: PathBuf,
        #[arg(long, short, help = "Output file")]
        output: PathBuf,
    },

    /// Show configuration state and clip counts
    Status {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Documentation site configuration
    Site {
        #[command(subcommand)]
        action: SiteAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Edit the global configuration file with $EDITOR
    Edit,
}

#[derive(Subcommand)]
enum SiteAction {
    /// Print the site config
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "json",
            help = "Output format: json, toml, yaml, module"
        )]
        format: ExportFormat,
        #[arg(long, help = "Site config file (default: built-in Vmaker site)")]
        file: Option<PathBuf>,
    },
    /// Validate the site config and report every issue
    Check {
        #[arg(long, help = "Site config file (default: built-in Vmaker site)")]
        file: Option<PathBuf>,
    },
    /// Write the generator config module
    Export {
        #[arg(long, short, default_value = DEFAULT_MODULE_PATH)]
        output: PathBuf,
        #[arg(long, help = "Site config file (default: built-in Vmaker site)")]
        file: Option<PathBuf>,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mVmaker encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Init {
            raw,
            clip,
            output,
            current,
            force,
        } => {
            commands::init::run(InitOptions {
                raw_dir: raw,
                clip_dir: clip,
                output_dir: output,
                curr_dirname: current,
                force,
            })?;
        }
        Commands::Add {
            new_name,
            time,
            clip_info,
            suffix,
            yes,
        } => {
            commands::add::run(commands::add::AddOptions {
                strategy: RenameStrategy::from_options(new_name, time, clip_info, suffix),
                yes,
            })?;
        }
        Commands::Dir => {
            commands::dir::run()?;
        }
        Commands::List { raw, probe } => {
            let rt = runtime()?;
            rt.block_on(commands::list::run(raw, probe))?;
        }
        Commands::New { name } => {
            commands::new::run(&name)?;
        }
        Commands::Cut {
            input,
            start,
            end,
            output,
        } => {
            let rt = runtime()?;
            rt.block_on(commands::media::cut(&input, &start, &end, output))?;
        }
        Commands::Mute { input, output } => {
            let rt = runtime()?;
            rt.block_on(commands::media::mute(&input, output))?;
        }
        Commands::Convert { input, output } => {
            let rt = runtime()?;
            rt.block_on(commands::media::convert(&input, &output))?;
        }
        Commands::Status { format } => {
            commands::status::run(&format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Edit => {
                commands::config::edit()?;
            }
        },
        Commands::Site { action } => match action {
            SiteAction::Show { format, file } => {
                commands::site::show(format, file.as_deref())?;
            }
            SiteAction::Check { file } => {
                commands::site::check(file.as_deref())?;
            }
            SiteAction::Export { output, file } => {
                commands::site::export(&output, file.as_deref())?;
            }
        },
    }

    Ok(())
}
