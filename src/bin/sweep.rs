use std::env;
use std::error::Error;
use std::io::{self, BufWriter, Write};

use aerosurf::components::{load_airfoil, AirfoilConfig, FlightCoefficients};
use aerosurf::systems::aerodynamics::{sweep_coefficients, CoefficientSample};
use aerosurf::utils::{deg_to_rad, finite_or_zero, rad_to_deg};

const USAGE: &str = "usage: aerosurf_sweep [profile.yaml|profile.json] [--flap DEG] [--samples N] [--json]";

struct SweepArgs {
    profile: Option<String>,
    flap_deg: f64,
    samples: usize,
    json: bool,
}

fn parse_args() -> Result<SweepArgs, Box<dyn Error>> {
    let mut parsed = SweepArgs {
        profile: None,
        flap_deg: 0.0,
        samples: 1000,
        json: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--flap" => {
                let value = args.next().ok_or("--flap needs a value in degrees")?;
                parsed.flap_deg = value.parse()?;
            }
            "--samples" => {
                let value = args.next().ok_or("--samples needs a count")?;
                parsed.samples = value.parse()?;
            }
            "--json" => parsed.json = true,
            "-h" | "--help" => return Err(USAGE.into()),
            other if other.starts_with("--") => {
                return Err(format!("unknown option {other}\n{USAGE}").into())
            }
            path => parsed.profile = Some(path.to_string()),
        }
    }

    Ok(parsed)
}

/// Non-finite values are written as 0 so plots stay readable.
fn sanitized(sample: &CoefficientSample) -> CoefficientSample {
    let c = sample.coefficients;
    CoefficientSample {
        aoa: sample.aoa,
        coefficients: FlightCoefficients::new(
            finite_or_zero(c.lift),
            finite_or_zero(c.drag),
            finite_or_zero(c.moment),
        ),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let config = match &args.profile {
        Some(path) => load_airfoil(path)?,
        None => AirfoilConfig::default(),
    };

    let samples: Vec<_> = sweep_coefficients(&config, deg_to_rad(args.flap_deg), args.samples)
        .iter()
        .map(sanitized)
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.json {
        serde_json::to_writer_pretty(&mut out, &samples)?;
        writeln!(out)?;
    } else {
        writeln!(out, "aoa_deg,lift,drag,moment")?;
        for sample in &samples {
            let c = &sample.coefficients;
            writeln!(
                out,
                "{:.4},{:.6},{:.6},{:.6}",
                rad_to_deg(sample.aoa),
                c.lift,
                c.drag,
                c.moment
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
