//! Drives a profile run: samples in, tables, statistics and CSV files out.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
};

use anyhow::Context;
use elevation_spline::{
    analysis::{EnergyModel, RouteStats},
    report, GeoPoint, Profile,
};
use log::{info, warn};

use crate::config::JobConfig;

pub fn run_profile<W: Write>(points: &[GeoPoint], job: &JobConfig, out: &mut W) -> anyhow::Result<()> {
    let profile = Profile::from_points(points)?;
    let analysis = &job.analysis;

    writeln!(out, "Nodes: {}", profile.len())?;
    report::write_knot_table(out, &profile)?;

    if !analysis.subsets.contains(&analysis.report_nodes) {
        warn!(
            "report_nodes = {} is not one of the subsets {:?}, no statistics will be reported",
            analysis.report_nodes, analysis.subsets
        );
    }

    if job.output.save_profile {
        fs::create_dir_all(&job.output.directory).with_context(|| {
            format!("failed to create output directory {}", job.output.directory.display())
        })?;
    }

    for &nodes in &analysis.subsets {
        if nodes > profile.len() {
            warn!("requested {} nodes but only {} are available, skipping", nodes, profile.len());
            writeln!(out, "\nSkipping {} nodes: only {} available", nodes, profile.len())?;
            continue;
        }

        let subset = profile.subset(nodes)?;
        let spline = subset.to_spline()?;
        let curve = spline.sample(analysis.samples)?;
        info!("fitted spline through {} nodes", nodes);

        writeln!(out, "\nSpline through {} nodes", nodes)?;

        if nodes == analysis.report_nodes {
            writeln!(out, "\nCoefficients:")?;
            report::write_coefficients(out, &spline)?;

            let model = EnergyModel { mass_kg: analysis.hiker_mass_kg, ..EnergyModel::default() };
            let stats = RouteStats::compute(&profile, &curve, &model);
            writeln!(out, "\nRoute analysis:")?;
            report::write_stats(out, &stats)?;
        }

        if job.output.save_profile {
            let path = job.output.directory.join(format!("profile_{}.csv", nodes));
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            report::write_profile_csv(&mut writer, &curve)?;
            writer.flush()?;
            writeln!(out, "Profile saved to {}", path.display())?;
        }
    }
    Ok(())
}

/// Prints coefficients of the spline through `nodes` evenly spread points, or through all points.
pub fn run_coefficients<W: Write>(points: &[GeoPoint], nodes: Option<usize>, out: &mut W) -> anyhow::Result<()> {
    let profile = Profile::from_points(points)?;
    let subset = match nodes {
        Some(nodes) => profile.subset(nodes)?,
        None => profile,
    };
    let spline = subset.to_spline()?;

    report::write_coefficients(out, &spline)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnalysisConfig, OutputConfig};

    fn points(count: usize) -> Vec<GeoPoint> {
        (0..count)
            .map(|i| GeoPoint {
                latitude: 48.16 + i as f64 * 0.0005,
                longitude: 24.53 - i as f64 * 0.001,
                elevation: 1300.0 + (i as f64 * 0.7).sin() * 40.0 + i as f64 * 10.0,
            })
            .collect()
    }

    fn job(subsets: Vec<usize>, report_nodes: usize) -> JobConfig {
        JobConfig {
            analysis: AnalysisConfig { subsets, report_nodes, samples: 50, ..AnalysisConfig::default() },
            output: OutputConfig { save_profile: false, ..OutputConfig::default() },
        }
    }

    #[test]
    fn profile_run_reports_selected_subset() {
        let mut out = Vec::new();
        run_profile(&points(12), &job(vec![4, 8, 20], 8), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Nodes: 12"));
        assert!(text.contains("Spline through 4 nodes"));
        assert!(text.contains("Spline through 8 nodes"));
        assert!(text.contains("Skipping 20 nodes: only 12 available"));
        assert_eq!(1, text.matches("Coefficients:").count());
        assert!(text.contains("Total ascent:"));
        assert!(!text.contains("Profile saved"));
    }

    #[test]
    fn too_few_nodes_for_spline() {
        let mut out = Vec::new();
        let result = run_profile(&points(12), &job(vec![2], 2), &mut out);

        assert!(result.is_err());
    }

    #[test]
    fn coefficients_for_all_points() {
        let mut out = Vec::new();
        run_coefficients(&points(6), None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        // header, separator and one row per segment
        assert_eq!(7, text.lines().count());
    }
}
