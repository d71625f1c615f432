// SPDX-License-Identifier: MPL-2.0
use material_icons::{catalog, config, mirror, paths, Error, IconRasterCache, IconStyle, Result};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
material-icons - render Material Design icons to PNG

USAGE:
  material-icons [--icon-dir DIR] [--config-dir DIR] <COMMAND>

COMMANDS:
  render <NAME> [--size N] [--color C] [--style S] [--output FILE]
  list [--style S]
  mirror <UPSTREAM_SRC> [--style S]...

STYLES: outlined, round, sharp, twotone
";

enum Command {
    Render {
        name: String,
        size: Option<u32>,
        color: Option<String>,
        style: Option<IconStyle>,
        output: Option<PathBuf>,
    },
    List {
        style: Option<IconStyle>,
    },
    Mirror {
        upstream_src: PathBuf,
        styles: Vec<IconStyle>,
    },
}

fn parse_args() -> std::result::Result<Option<Command>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let icon_dir: Option<PathBuf> = args.opt_value_from_str("--icon-dir")?;
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir")?;
    paths::init_cli_overrides(icon_dir, config_dir);

    let command = match args.subcommand()?.as_deref() {
        Some("render") => Command::Render {
            size: args.opt_value_from_str("--size")?,
            color: args.opt_value_from_str("--color")?,
            style: args.opt_value_from_str("--style")?,
            output: args.opt_value_from_str(["-o", "--output"])?,
            name: args.free_from_str()?,
        },
        Some("list") => Command::List {
            style: args.opt_value_from_str("--style")?,
        },
        Some("mirror") => Command::Mirror {
            styles: args.values_from_str("--style")?,
            upstream_src: args.free_from_str()?,
        },
        _ => return Ok(None),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }
    Ok(Some(command))
}

fn run(command: Command) -> Result<()> {
    let settings = config::load()?;
    let icon_dir = settings
        .resolve_icon_dir()
        .ok_or_else(|| Error::Config("cannot determine the icon directory".into()))?;

    match command {
        Command::Render {
            name,
            size,
            color,
            style,
            output,
        } => {
            let cache = IconRasterCache::new(&icon_dir, settings.cache_config());
            let style = style.unwrap_or_else(|| settings.style());
            let size = size.unwrap_or_else(|| settings.size());
            let color = color.unwrap_or_else(|| settings.color().to_string());

            let png = cache.resolve(&name, size, &color, style)?;
            let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.png", name)));
            std::fs::write(&output, png.as_slice())?;
            log::info!("Wrote {} ({} bytes)", output.display(), png.len());
        }
        Command::List { style } => {
            let style = style.unwrap_or_else(|| settings.style());
            let names = catalog::list_icons(&icon_dir, style)?;
            for name in &names {
                println!("{}", name);
            }
            log::info!("Total icons: {}", names.len());
        }
        Command::Mirror {
            upstream_src,
            styles,
        } => {
            let report = mirror::mirror_icons(&upstream_src, &icon_dir, &styles)?;
            for (style, count) in &report.per_style {
                println!("{}: {}", style, count);
            }
            println!("Icons downloaded into: {}", icon_dir.display());
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match parse_args() {
        Ok(Some(command)) => command,
        Ok(None) => {
            print!("{}", HELP);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}\n\n{}", err, HELP);
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
