use crate::utils::Result;
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="exacprep",
          author="Mike Warburton",
          version=&**FULL_VERSION,
          about="ExAC homozygote count extraction and VCF phasing-field removal",
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) 2015-{}
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Extract per-allele homozygote counts from an ExAC entry")]
    ExtractHom(ExtractHomArgs),
    #[clap(about = "Remove PGT and PID phasing fields from a VCF file")]
    StripPhasing(StripPhasingArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("extract-hom")))]
#[command(arg_required_else_help(true))]
pub struct ExtractHomArgs {
    #[clap(required = true)]
    #[clap(help = "Output file with one REF/ALT/AC_Hom line per alternate allele")]
    #[clap(value_name = "OUTPUT")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: PathBuf,

    #[clap(required = true)]
    #[clap(help = "Reference allele")]
    #[clap(value_name = "REF")]
    pub reference: String,

    #[clap(required = true)]
    #[clap(help = "Comma-separated alternate alleles")]
    #[clap(value_name = "ALTS")]
    pub alternates: String,

    #[clap(required = true)]
    #[clap(help = "ExAC annotation text containing the AC_Hom tag")]
    #[clap(value_name = "ANNOTATION")]
    #[clap(allow_hyphen_values = true)]
    pub annotation: String,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("strip-phasing")))]
#[command(arg_required_else_help(true))]
pub struct StripPhasingArgs {
    #[clap(required = true)]
    #[clap(help = "VCF file to be edited (optionally gzipped)")]
    #[clap(value_name = "INPUT_VCF")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(help = "Output VCF file; a .gz extension compresses the output")]
    #[clap(value_name = "OUTPUT_VCF")]
    #[arg(value_parser = check_prefix_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,
}

fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_verbose(args: &Cli) {
    let filter_level = verbosity_filter(args.verbosity);

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("Input file, {}, does not exist", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}
