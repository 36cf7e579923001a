use clap::Parser;
use exacprep::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{extract, strip},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::ExtractHom(_) => "extract-hom",
        Command::StripPhasing(_) => "strip-phasing",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::ExtractHom(args) => extract::extract_hom(args)?,
        Command::StripPhasing(args) => strip::strip_phasing(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
