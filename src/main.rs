use std::path::PathBuf;
use std::process::ExitCode;

use docland::{render_json, FontName, Scene, Settings};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: docland <input.json> [--settings <file>] [--fonts <family:style,...>]";

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Docland(#[from] docland::Error),
}

struct Args {
    input: PathBuf,
    settings: PathBuf,
    fonts: Vec<FontName>,
}

fn parse_font(entry: &str) -> FontName {
    match entry.split_once(':') {
        Some((family, style)) => FontName::new(family.trim(), style.trim()),
        None => FontName::new(entry.trim(), "Regular"),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut input = None;
    let mut settings = PathBuf::from("docland.json");
    let mut fonts = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--settings needs a path".to_owned()))?;
                settings = PathBuf::from(path);
            }
            "--fonts" => {
                let list = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--fonts needs a list".to_owned()))?;
                fonts.extend(list.split(',').filter(|f| !f.is_empty()).map(parse_font));
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown flag {flag}")));
            }
            _ if input.is_some() => {
                return Err(CliError::Usage(format!("unexpected argument {arg}")));
            }
            _ => input = Some(PathBuf::from(&arg)),
        }
    }

    let input = input.ok_or_else(|| CliError::Usage("missing input file".to_owned()))?;

    Ok(Args {
        input,
        settings,
        fonts,
    })
}

fn run(args: Args, mut settings: Settings) -> Result<(), CliError> {
    settings.fonts.extend(args.fonts);

    let json = std::fs::read_to_string(&args.input).map_err(docland::Error::from)?;

    let mut scene = Scene::with_fonts(settings.font_book());
    let registry = render_json(&mut scene, &json, &settings)?;

    info!(
        objects = registry.len(),
        roots = scene.roots().count(),
        "rendered {}",
        args.input.display()
    );

    let snapshot = serde_json::to_string_pretty(&scene.snapshot()).map_err(docland::Error::from)?;
    println!("{snapshot}");

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let settings = match Settings::load_or_default(&args.settings) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("failed to load {}: {err}", args.settings.display());
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, CliError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_flags() {
        let args = args(&["file.json", "--settings", "s.json", "--fonts", "Inter:Bold,Roboto"]).unwrap();

        assert_eq!(args.input, PathBuf::from("file.json"));
        assert_eq!(args.settings, PathBuf::from("s.json"));
        assert_eq!(
            args.fonts,
            [FontName::new("Inter", "Bold"), FontName::new("Roboto", "Regular")]
        );
    }

    #[test]
    fn rejects_bad_invocations() {
        assert!(matches!(args(&[]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "b.json"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "--verbose"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "--fonts"]), Err(CliError::Usage(_))));
    }
}
