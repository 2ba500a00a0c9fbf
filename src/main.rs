use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use sharecrack::cli::{Cli, Commands};
use sharecrack::commands::{
    RecoverOptions, Recovery, SourcedRecovery, decode_share, recover_all, recover_secret,
};
use sharecrack::input::ShareDocument;

fn init_logger(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")
}

/// Read a single share document from stdin
fn read_document() -> Result<ShareDocument> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter share document as JSON (end with Ctrl-D):");
    }
    ShareDocument::from_reader(io::stdin().lock()).context("Failed to read document from stdin")
}

fn print_recovery(source: &str, recovery: &Recovery, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&SourcedRecovery { source, recovery })?);
        return Ok(());
    }

    println!("{source}: Secret: {}", recovery.secret);
    for index in &recovery.inconsistent {
        println!("{source}: share {index} does not lie on the polynomial");
    }
    Ok(())
}

fn recover(files: &[PathBuf], options: RecoverOptions, json: bool) -> Result<()> {
    if files.is_empty() {
        let document = read_document()?;
        let recovery = recover_secret(&document, options)?;
        return print_recovery("stdin", &recovery, json);
    }

    let outcome = recover_all(files, options);
    for (path, result) in &outcome.results {
        if let Ok(recovery) = result {
            print_recovery(&path.display().to_string(), recovery, json)?;
        }
    }

    if outcome.failed > 0 {
        bail!("{} of {} documents failed", outcome.failed, files.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    match cli.command {
        Commands::Recover {
            files,
            verify,
            json,
        } => {
            recover(&files, RecoverOptions { verify }, json)?;
        }
        Commands::Decode { base, value } => {
            println!("{}", decode_share(&value, base)?);
        }
    }

    Ok(())
}
