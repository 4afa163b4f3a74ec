extern crate elevation_spline;

use std::path::Path;

use elevation_spline::{
    analysis::{EnergyModel, RouteStats},
    report,
    route::load_elevation_samples,
    Profile,
};

fn main() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/zaroslyak_hoverla.json");
    let points = load_elevation_samples(&path).unwrap();

    let profile = Profile::from_points(&points).unwrap();
    let spline = profile.subset(10).unwrap().to_spline().unwrap();
    let curve = spline.sample(500).unwrap();

    let mut stdout = std::io::stdout();
    report::write_coefficients(&mut stdout, &spline).unwrap();
    println!();
    report::write_stats(&mut stdout, &RouteStats::compute(&profile, &curve, &EnergyModel::default())).unwrap();
}
