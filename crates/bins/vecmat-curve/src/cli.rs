use log::LevelFilter;
use std::path::PathBuf;

/// Arguments for the `vecmat-curve` command.
#[derive(clap::Parser, Debug, Clone)]
#[clap(about = "Samples a rational Bézier curve described in a TOML file.")]
pub struct CliArgs {
    #[clap(help = "TOML file holding the control points.")]
    pub input: PathBuf,

    #[clap(
        short = 'n',
        long,
        help = "Number of interior samples; overrides the value of the input file."
    )]
    pub samples: Option<u32>,

    #[clap(
        long,
        default_value_t = 1,
        help = "The log level: 0 = error, 1 = warn, 2 = info, 3 = debug, 4 = trace."
    )]
    pub log_level: u8,

    #[clap(long, help = "Prefixes log lines with the time elapsed since launch.")]
    pub log_timestamp: bool,
}

/// Parses the arguments, returns them with the launch time.
pub fn parse_args<T: clap::Parser>() -> (T, std::time::SystemTime) {
    (T::parse(), std::time::SystemTime::now())
}

/// Logs the launch banner. Call after [`setup_logging`].
pub fn log_launch(name: &str, launch_time: std::time::SystemTime) {
    log::info!("{}", launch_banner(name, launch_time));
}

fn launch_banner(name: &str, launch_time: std::time::SystemTime) -> String {
    format!(
        "{} launched at {} on {}.",
        name,
        chrono::DateTime::<chrono::Utc>::from(launch_time),
        std::env::consts::OS
    )
}

/// Initialises logging.
///
/// # Arguments
///
/// * `timestamp` - Base time of the elapsed-time prefix; no prefix if `None`.
/// * `log_level` - See [`log_filter_from_level`].
pub fn setup_logging(timestamp: Option<std::time::SystemTime>, log_level: u8) {
    use std::io::Write;
    let mut builder = env_logger::builder();
    builder.format(move |buf, record| {
        let top_level_module = record
            .module_path()
            .and_then(|path| path.split("::").next())
            .unwrap_or("?");
        match timestamp {
            Some(timestamp) => {
                let duration = timestamp.elapsed().unwrap_or_default();
                let millis = duration.as_millis() % 1000;
                let seconds = duration.as_secs() % 60;
                let minutes = (duration.as_secs() / 60) % 60;
                let hours = (duration.as_secs() / 60) / 60;
                writeln!(
                    buf,
                    "{}:{}:{}.{:03} {:5} [{}]: {}",
                    hours,
                    minutes,
                    seconds,
                    millis,
                    record.level(),
                    top_level_module,
                    record.args()
                )
            },
            None => {
                writeln!(
                    buf,
                    "{:5} [{}]: {}",
                    record.level(),
                    top_level_module,
                    record.args()
                )
            },
        }
    });
    builder.filter_level(log_filter_from_level(log_level)).init();
}

/// Converts a log level to a log filter.
pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn arguments() {
        let args = CliArgs::try_parse_from(["vecmat-curve", "curve.toml"]).unwrap();
        assert_eq!(args.input, PathBuf::from("curve.toml"));
        assert_eq!(args.samples, None);
        assert_eq!(args.log_level, 1);
        assert!(!args.log_timestamp);

        let args = CliArgs::try_parse_from([
            "vecmat-curve",
            "-n",
            "32",
            "--log-level",
            "3",
            "--log-timestamp",
            "curve.toml",
        ])
        .unwrap();
        assert_eq!(args.samples, Some(32));
        assert_eq!(args.log_level, 3);
        assert!(args.log_timestamp);

        assert!(CliArgs::try_parse_from(["vecmat-curve"]).is_err());
        assert!(CliArgs::try_parse_from(["vecmat-curve", "-n", "-3", "curve.toml"]).is_err());
    }

    #[test]
    fn log_levels() {
        assert_eq!(log_filter_from_level(0), LevelFilter::Error);
        assert_eq!(log_filter_from_level(1), LevelFilter::Warn);
        assert_eq!(log_filter_from_level(4), LevelFilter::Trace);
        assert_eq!(log_filter_from_level(200), LevelFilter::Trace);
    }

    #[test]
    fn banner() {
        let launch = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(90);
        assert_eq!(
            launch_banner("vecmat-curve", launch),
            format!(
                "vecmat-curve launched at 1970-01-01 00:01:30 UTC on {}.",
                std::env::consts::OS
            )
        );
    }
}
