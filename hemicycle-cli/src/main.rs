mod settings;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use hemicycle::preset::FRENCH_ASSEMBLY;
use hemicycle::{plan_seats, ChamberConfig, PartyGroup};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::settings::{load_settings, Settings};

/// Draws a hemicycle seat chart, one colored circle per seat.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file; the extension picks the format (.png or .svg).
    #[arg(short, long, value_name = "FILE", required_unless_present = "print_settings")]
    output: Option<PathBuf>,
    /// TOML settings file with chamber geometry, reserved seats and output options.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Canvas width in pixels when no [chamber] section is given. Must be even.
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,
    /// A party as COUNT:#RRGGBB or COUNT:#RRGGBB:NAME, in seating order. Repeatable.
    #[arg(short, long = "party", value_name = "PARTY", value_parser = parse_party)]
    parties: Vec<PartyGroup>,
    /// A reserved seat index. Repeatable; replaces the configured set.
    #[arg(long = "skip", value_name = "SEAT")]
    skip: Vec<usize>,
    /// Color of the seats no party takes.
    #[arg(long, value_name = "#RRGGBB")]
    unaffiliated: Option<String>,
    /// Leave the background transparent.
    #[arg(long)]
    transparent: bool,
    /// Print the effective settings as TOML and exit.
    #[arg(long)]
    print_settings: bool,
    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_party(s: &str) -> Result<PartyGroup, String> {
    let mut fields = s.splitn(3, ':');
    let seats = fields
        .next()
        .unwrap_or_default()
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad seat count in {:?}: {}", s, e))?;
    let color = fields
        .next()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| format!("expected COUNT:#RRGGBB, got {:?}", s))?;
    let party = PartyGroup::new(seats, color.trim());
    Ok(match fields.next() {
        Some(name) if !name.is_empty() => party.named(name),
        _ => party,
    })
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line values layered over the settings file, layered over the
/// built-in chamber.
fn effective_settings(args: &Args, mut settings: Settings) -> Result<Settings> {
    let preset = &*FRENCH_ASSEMBLY;
    settings.chamber = match (settings.chamber, args.width) {
        (Some(chamber), Some(width)) => {
            warn!(width, "--width ignored, the settings file has a [chamber] section");
            Some(chamber)
        }
        (Some(chamber), None) => Some(chamber),
        (None, width) => Some(ChamberConfig::for_width(width.unwrap_or(preset.width))?),
    };
    if !args.skip.is_empty() {
        settings.skip = Some(args.skip.iter().copied().collect());
    }
    settings.skip.get_or_insert_with(|| preset.skip.clone());
    if let Some(color) = &args.unaffiliated {
        settings.unaffiliated = Some(color.clone());
    }
    settings
        .unaffiliated
        .get_or_insert_with(|| preset.unaffiliated.clone());
    settings.output.transparent |= args.transparent;
    Ok(settings)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let settings = load_settings(args.config.as_deref())?;
    let settings = effective_settings(&args, settings)?;
    if args.print_settings {
        print!("{}", toml::to_string_pretty(&settings)?);
        return Ok(());
    }

    let Some(output) = &args.output else {
        bail!("no output file given");
    };
    let (Some(chamber), Some(skip), Some(unaffiliated)) =
        (&settings.chamber, &settings.skip, &settings.unaffiliated)
    else {
        bail!("incomplete settings");
    };
    let parties: &[PartyGroup] = if args.parties.is_empty() {
        &FRENCH_ASSEMBLY.parties
    } else {
        &args.parties
    };

    info!(
        seats = chamber.seat_count(),
        reserved = skip.len(),
        parties = parties.len(),
        "planning chamber"
    );
    let commands = plan_seats(chamber, skip, parties, unaffiliated)
        .context("cannot seat the parties in this chamber")?;
    let background = settings.output.background()?;
    hemicycle_render::save(output, chamber, &commands, background)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hemicycle::SkipSet;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["hemicycle", "-o", "out.png"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_party() {
        assert_eq!(parse_party("17:#D93A33"), Ok(PartyGroup::new(17, "#D93A33")));
        assert_eq!(
            parse_party("9:#313184:Libertés"),
            Ok(PartyGroup::new(9, "#313184").named("Libertés"))
        );
        assert!(parse_party("x:#D93A33").is_err());
        assert!(parse_party("17").is_err());
        assert!(parse_party("17:").is_err());
    }

    #[test]
    fn test_defaults_come_from_preset() {
        let settings = effective_settings(&args(&[]), Settings::default()).unwrap();
        assert_eq!(settings.chamber.unwrap().width(), 700);
        assert_eq!(settings.skip, Some(SkipSet::from([0, 10, 570])));
        assert_eq!(settings.unaffiliated.as_deref(), Some("#D6D6CE"));
    }

    #[test]
    fn test_flags_override_settings() {
        let a = args(&[
            "--width", "1000", "--skip", "3", "--skip", "4", "--unaffiliated", "#999999",
            "--transparent", "-p", "5:#111111", "-p", "6:#222222:Other",
        ]);
        assert_eq!(a.parties.len(), 2);
        let settings = effective_settings(&a, Settings::default()).unwrap();
        assert_eq!(settings.chamber.unwrap().width(), 1000);
        assert_eq!(settings.skip, Some(SkipSet::from([3, 4])));
        assert_eq!(settings.unaffiliated.as_deref(), Some("#999999"));
        assert!(settings.output.transparent);
    }

    #[test]
    fn test_odd_width_is_rejected() {
        assert!(effective_settings(&args(&["--width", "701"]), Settings::default()).is_err());
    }

    #[test]
    fn test_output_is_required() {
        assert!(Args::try_parse_from(["hemicycle"]).is_err());
        assert!(Args::try_parse_from(["hemicycle", "--print-settings"]).is_ok());
    }
}
