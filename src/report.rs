//! Plain-text tables and CSV output.

use std::io::{self, Write};

use crate::{analysis::RouteStats, route::Profile, spline::Spline};

pub fn write_knot_table<W: Write>(writer: &mut W, profile: &Profile) -> io::Result<()> {
    writeln!(writer, "{:>12} | {:>10}", "distance m", "elevation m")?;
    writeln!(writer, "{}", "-".repeat(26))?;
    for (distance, elevation) in profile.distances().iter().zip(profile.elevations()) {
        writeln!(writer, "{:>12.2} | {:>10.2}", distance, elevation)?;
    }
    Ok(())
}

pub fn write_coefficients<W: Write>(writer: &mut W, spline: &Spline) -> io::Result<()> {
    writeln!(
        writer,
        "{:<3} | {:<12} | {:<12} | {:<12} | {:<12}",
        "i", "a", "b", "c", "d"
    )?;
    writeln!(writer, "{}", "-".repeat(66))?;
    for (i, segment) in spline.coefficients().iter().enumerate() {
        writeln!(
            writer,
            "{:<3} | {:<12.4} | {:<12.4} | {:<12.4} | {:<12.6}",
            i, segment.a, segment.b, segment.c, segment.d
        )?;
    }
    Ok(())
}

/// Dense curve as `distance,elevation` CSV.
pub fn write_profile_csv<W: Write>(writer: &mut W, curve: &[(f64, f64)]) -> io::Result<()> {
    writeln!(writer, "distance,elevation")?;
    for (distance, elevation) in curve {
        writeln!(writer, "{:.3},{:.3}", distance, elevation)?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(writer: &mut W, stats: &RouteStats) -> io::Result<()> {
    writeln!(writer, "Total distance: {:.2} m", stats.total_distance_m)?;
    writeln!(writer, "Total ascent: {:.2} m", stats.total_ascent_m)?;
    writeln!(writer, "Total descent: {:.2} m", stats.total_descent_m)?;
    writeln!(writer, "Max climb grade: {:.2}%", stats.max_climb_grade)?;
    writeln!(writer, "Max descent grade: {:.2}%", stats.max_descent_grade)?;
    writeln!(writer, "Mean absolute grade: {:.2}%", stats.mean_abs_grade)?;
    writeln!(writer, "Mechanical work: {:.2} kJ", stats.work_kj)?;
    writeln!(writer, "Energy: {:.2} kcal", stats.energy_kcal)?;
    Ok(())
}
