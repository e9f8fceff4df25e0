use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use smd_observers::{PlotObserver, ShowConfig};
use smd_oscillator::{ModelParameters, Trajectory, config::OscillatorConfig, integrate};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Integrate a damped spring-mass oscillator with forward Euler and plot it",
    long_about = None
)]
struct Cli {
    /// Path to a TOML file with `omega0`, `zeta`, `dt` and `duration`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Natural frequency in rad/s (default: 2π)
    #[arg(long, allow_negative_numbers = true)]
    omega0: Option<f64>,

    /// Damping ratio (default: 0.25)
    #[arg(long, allow_negative_numbers = true)]
    zeta: Option<f64>,

    /// Time step in seconds (default: 0.01)
    #[arg(long, allow_negative_numbers = true)]
    dt: Option<f64>,

    /// Simulated duration in seconds (default: 10)
    #[arg(long, allow_negative_numbers = true)]
    duration: Option<f64>,

    /// Print `time,displacement` rows to stdout instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Resolves parameters: defaults, then the config file, then flags.
    fn parameters(&self) -> Result<ModelParameters> {
        let mut config = match &self.config {
            Some(path) => OscillatorConfig::load(path)?,
            None => OscillatorConfig::default(),
        };

        if let Some(omega0) = self.omega0 {
            config.omega0 = omega0;
        }
        if let Some(zeta) = self.zeta {
            config.zeta = zeta;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(duration) = self.duration {
            config.duration = duration;
        }

        debug!(?config, "resolved configuration");
        Ok(config.into_parameters()?)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.parameters()?;
    let trajectory = integrate(&params).context("integration failed")?;

    if let Some(last) = trajectory.samples().last() {
        info!(
            samples = trajectory.len(),
            final_time = last.time,
            final_displacement = last.displacement(),
            "integration complete"
        );
    } else {
        info!("duration is shorter than one step; nothing to integrate");
    }

    if cli.headless {
        let stdout = io::stdout();
        write_csv(stdout.lock(), &trajectory).context("failed to write samples")?;
        return Ok(());
    }

    let mut plot = PlotObserver::<1>::new(["displacement"]);
    plot.record_all(&trajectory);
    plot.show(ShowConfig::displacement())
        .map_err(|err| anyhow!("failed to open plot window: {err}"))
}

fn write_csv(mut out: impl Write, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(out, "time,displacement")?;
    for [time, displacement] in trajectory.displacement_series() {
        writeln!(out, "{time},{displacement}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("smd").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_runs_reference_parameters() {
        let cli = parse(&[]);

        assert!(!cli.headless);
        assert_eq!(cli.parameters().unwrap(), ModelParameters::default());
    }

    #[test]
    fn flags_override_defaults() {
        let params = parse(&["--zeta", "1.0", "--duration", "2.0"]).parameters().unwrap();

        assert_eq!(params.zeta(), 1.0);
        assert_eq!(params.duration(), 2.0);
        assert_eq!(params.dt(), ModelParameters::DEFAULT_DT);
    }

    #[test]
    fn negative_values_reach_validation() {
        let err = parse(&["--omega0", "-1"]).parameters().unwrap_err();
        assert!(err.to_string().contains("omega0"), "{err}");
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = parse(&["--config", "/nonexistent/smd.toml"]).parameters().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/smd.toml"), "{err}");
    }

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let params = ModelParameters::new(1.0, 0.0, 0.5, 1.0).unwrap();
        let trajectory = integrate(&params).unwrap();

        let mut out = Vec::new();
        write_csv(&mut out, &trajectory).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "time,displacement\n0,2\n0.5,2\n");
    }
}
