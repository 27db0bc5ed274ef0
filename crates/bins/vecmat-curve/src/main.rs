//! Samples a rational Bézier curve and prints the points, one `x;y;z` per
//! line.

mod cli;
mod error;
mod input;

use crate::{cli::CliArgs, error::CliError, input::CurveFile};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, launch_time) = cli::parse_args::<CliArgs>();

    cli::setup_logging(args.log_timestamp.then_some(launch_time), args.log_level);
    cli::log_launch("vecmat-curve", launch_time);

    run(&args).map_err(|err| err.into())
}

fn run(args: &CliArgs) -> Result<(), CliError> {
    let file = CurveFile::load(&args.input)?;
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let written = write_samples(&file, args.samples, &mut out)?;
    out.flush().map_err(CliError::Output)?;
    log::info!("sampled {} points from {}", written, args.input.display());
    Ok(())
}

/// Samples the curve of `file` and writes one `x;y;z` line per point.
///
/// Returns the number of points written.
fn write_samples<W: Write>(
    file: &CurveFile,
    samples: Option<u32>,
    out: &mut W,
) -> Result<usize, CliError> {
    let points = vecmat::evaluate(&file.control_points(), file.sample_count(samples))?;
    for p in &points {
        writeln!(out, "{}", p).map_err(CliError::Output)?;
    }
    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_to_string(toml: &str, samples: Option<u32>) -> Result<String, CliError> {
        let file = CurveFile::parse(toml)?;
        let mut out = Vec::new();
        let written = write_samples(&file, samples, &mut out)?;
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), written);
        Ok(text)
    }

    #[test]
    fn one_line_per_point() {
        let line = "points = [[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]]";
        assert_eq!(
            sample_to_string(line, Some(1)).unwrap(),
            "0;0;0\n0.5;0.5;0.5\n1;1;1\n"
        );
    }

    #[test]
    fn sample_count_from_file() {
        let segment = "samples = 3\npoints = [[0.0, 0.0, 0.0, 1.0], [4.0, 0.0, 0.0, 1.0]]";
        assert_eq!(
            sample_to_string(segment, None).unwrap(),
            "0;0;0\n1;0;0\n2;0;0\n3;0;0\n4;0;0\n"
        );
        assert_eq!(sample_to_string(segment, Some(0)).unwrap(), "0;0;0\n4;0;0\n");
    }

    #[test]
    fn single_point_is_rejected() {
        let err = sample_to_string("points = [[1.0, 2.0, 3.0, 1.0]]", None).unwrap_err();
        assert!(matches!(
            err,
            CliError::Curve(vecmat::Error::NotEnoughControlPoints {
                required: 2,
                actual: 1
            })
        ));
        assert_eq!(
            err.to_string(),
            "At least 2 control points are required, got 1"
        );
    }

    #[test]
    fn write_failure_is_reported() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let file = CurveFile::parse("points = [[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0]]")
            .unwrap();
        let err = write_samples(&file, Some(2), &mut Closed).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
    }
}
