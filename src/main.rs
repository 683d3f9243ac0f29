use clap::Parser;
use partsmith::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{build, optimize, scan},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Build(_) => "build",
        Command::Scan(_) => "scan",
        Command::Optimize(_) => "optimize",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Build(args) => build::build(args)?,
        Command::Scan(args) => scan::scan(args)?,
        Command::Optimize(args) => optimize::optimize(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
