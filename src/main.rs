// SPDX-License-Identifier: MPL-2.0
//! Yohaku - main entry point.
//!
//! ```bash
//! yohaku loop.mp4                    # Play a background video
//! yohaku --lang ja loop.mp4          # Force the Japanese UI
//! yohaku --log-level debug           # Enable debug logging
//! ```

use std::path::PathBuf;
use yohaku::app::{self, paths, Flags};

const HELP: &str = "\
Yohaku - ambient relaxation player

USAGE:
  yohaku [OPTIONS] [VIDEO]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, ja)
  --config-dir <DIR>   Directory holding settings.toml
  --log-level <LEVEL>  error, warn, info, debug or trace [default: info]
  -h, --help           Print this help
";

/// Command-line arguments.
#[derive(Debug, Default)]
struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    log_level: Option<String>,
    video_path: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();
        let parsed = Self {
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            log_level: args.opt_value_from_str("--log-level")?,
            video_path: args.opt_free_from_str()?,
        };

        let rest = args.finish();
        if !rest.is_empty() {
            eprintln!("warning: ignoring unused arguments: {:?}", rest);
        }
        Ok(parsed)
    }

    /// Log level as an env_logger filter string.
    fn log_filter(&self) -> &'static str {
        match self
            .log_level
            .as_deref()
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("error") => "error",
            Some("warn" | "warning") => "warn",
            Some("debug") => "debug",
            Some("trace") => "trace",
            _ => "info",
        }
    }
}

fn main() -> iced::Result {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return Ok(());
    }

    let args = match Args::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    log::info!("Starting Yohaku {}", env!("CARGO_PKG_VERSION"));
    log::debug!("CLI args: {:?}", args);

    // Takes precedence over YOHAKU_CONFIG_DIR
    paths::init_cli_overrides(args.config_dir);

    app::run(Flags {
        lang: args.lang,
        video_path: args.video_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(Args::default().log_filter(), "info");
        let args = Args {
            log_level: Some("verbose".into()),
            ..Args::default()
        };
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn log_filter_accepts_known_levels() {
        for (level, expected) in [("WARNING", "warn"), ("debug", "debug"), ("Trace", "trace")] {
            let args = Args {
                log_level: Some(level.into()),
                ..Args::default()
            };
            assert_eq!(args.log_filter(), expected);
        }
    }
}
