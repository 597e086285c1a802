//! Line-oriented text form of an [`InstanceBundle`] read by the optimizer.
//!
//! The layout is positional, so line order and field order never change:
//!
//! 1. customer, truck and drone counts
//! 2. x coordinates
//! 3. y coordinates
//! 4. demands
//! 5. dronable flags as `0`/`1`
//! 6. truck service times
//! 7. drone service times
//! 8. iterations
//! 9. tabu size
//! 10. verbose as `0`/`1`
//! 11. truck maximum velocity and capacity
//! 12. truck coefficient count followed by the coefficients
//! 13. drone variant label
//! 14. drone capacity, speed type and range type
//! 15. variant-specific drone fields
//!
//! Fields are separated by one space and every line ends with `\n`.
//! Problem values always print as floats. Configuration values print as
//! written in their JSON source (see [`Scalar`](crate::Scalar)).

use std::fmt::{self, Display, Write as _};
use std::io;

use crate::{DroneConfig, FlightProfile, InstanceBundle, Scalar};

/// Float wrapper printing the shortest round-trip representation.
///
/// Integral values keep a trailing `.0`; very small or very large magnitudes
/// switch to exponent notation with a signed, two-digit exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalFloat(pub f64);

impl Display for CanonicalFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }
        let repr = format!("{:?}", self.0);
        match repr.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = exponent
                    .strip_prefix('-')
                    .map_or(("+", exponent), |rest| ("-", rest));
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&repr),
        }
    }
}

struct Flag(bool);

impl Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

fn write_row<W, I>(out: &mut W, fields: I) -> fmt::Result
where
    W: fmt::Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.write_char(' ')?;
        }
        first = false;
        write!(out, "{field}")?;
    }
    out.write_char('\n')
}

fn floats(values: &[f64]) -> impl Iterator<Item = CanonicalFloat> + '_ {
    values.iter().copied().map(CanonicalFloat)
}

const fn flight_fields(flight: &FlightProfile) -> [Scalar; 5] {
    [
        flight.takeoff_speed,
        flight.cruise_speed,
        flight.landing_speed,
        flight.altitude,
        flight.battery,
    ]
}

fn write_drone<W: fmt::Write>(out: &mut W, drone: &DroneConfig) -> fmt::Result {
    writeln!(out, "{}", drone.kind_label())?;
    let capability = drone.capability();
    writeln!(
        out,
        "{} {} {}",
        capability.capacity,
        capability.speed_type,
        capability.range_type
    )?;
    match drone {
        DroneConfig::Linear(config) => write_row(
            out,
            flight_fields(&config.flight)
                .into_iter()
                .chain([config.beta, config.gamma]),
        ),
        DroneConfig::Nonlinear(config) => write_row(
            out,
            flight_fields(&config.flight).into_iter().chain([
                config.k1, config.k2, config.c1, config.c2, config.c4, config.c5,
            ]),
        ),
        DroneConfig::Endurance(config) => write_row(
            out,
            [config.fixed_time, config.fixed_distance, config.drone_speed],
        ),
    }
}

fn write_bundle<W: fmt::Write>(out: &mut W, bundle: &InstanceBundle) -> fmt::Result {
    let problem = &bundle.problem;
    write_row(
        out,
        [
            problem.customers_count(),
            problem.trucks_count(),
            problem.drones_count(),
        ],
    )?;
    write_row(out, floats(problem.x()))?;
    write_row(out, floats(problem.y()))?;
    write_row(out, floats(problem.demands()))?;
    write_row(out, problem.dronable().iter().copied().map(Flag))?;
    write_row(out, floats(problem.truck_service_time()))?;
    write_row(out, floats(problem.drone_service_time()))?;

    writeln!(out, "{}", bundle.run.iterations)?;
    writeln!(out, "{}", bundle.run.tabu_size)?;
    writeln!(out, "{}", Flag(bundle.run.verbose))?;

    let truck = &bundle.truck;
    writeln!(out, "{} {}", truck.maximum_velocity, truck.capacity)?;
    write!(out, "{}", truck.coefficients.len())?;
    for coefficient in &truck.coefficients {
        write!(out, " {coefficient}")?;
    }
    out.write_char('\n')?;

    write_drone(out, &bundle.drone)
}

/// Display adapter producing the canonical text of a bundle.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalInstance<'a>(pub &'a InstanceBundle);

impl Display for CanonicalInstance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bundle(f, self.0)
    }
}

/// Render `bundle` into its canonical text form.
///
/// Rendering is a pure function of the bundle: equal bundles always give
/// identical text.
#[must_use]
pub fn render_instance(bundle: &InstanceBundle) -> String {
    CanonicalInstance(bundle).to_string()
}

/// Render `bundle` and write it to `writer` in a single call.
///
/// # Errors
/// Returns any I/O error raised by `writer`.
pub fn write_instance<W: io::Write + ?Sized>(
    writer: &mut W,
    bundle: &InstanceBundle,
) -> io::Result<()> {
    writer.write_all(render_instance(bundle).as_bytes())?;
    writer.flush()
}
