use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use palbright::cli::{Args, DEFAULT_SCHEME_PATH};
use palbright::logging::setup_logging;
use palbright::scheme::ColorScheme;
use palbright::{report, tui};

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = setup_logging(args.log_level()) {
        eprintln!("palbright: logging disabled: {err:#}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let (Some(path), Some(save_path)) = (args.file.as_deref(), args.save_path()) else {
        println!("Target the colors.json generated by pywal to generate");
        println!("highlight colors from the existing 8 colors.");
        println!("Default path: {DEFAULT_SCHEME_PATH}");
        println!();
        Args::command().print_help()?;
        return Ok(());
    };

    let mut scheme = ColorScheme::load(path)?;

    // status lines would corrupt the JSON on stdout
    let status = |text: &str| {
        if !args.dry_run {
            report::line(text);
        }
    };
    status(&format!("Output: {}", save_path.display()));
    status(&format!("Wallpaper: {}", scheme.wallpaper_name()));
    status("Generating brighter colors");

    let palette = scheme.derive(&args.normal(), &args.highlight())?;

    if args.dry_run {
        print!("{}", scheme.to_json()?);
    } else {
        scheme.save(&save_path)?;
        log::info!("wrote {}", save_path.display());
    }

    if args.preview {
        tui::preview(&palette, scheme.wallpaper_name())?;
    }

    status("Done!");
    Ok(())
}
