extern crate elevation_spline;

use elevation_spline::{Knot, Spline};

fn main() {
    let knots = vec![
        Knot::new(0.0, 1.0),
        Knot::new(1.0, -1.0),
        Knot::new(2.0, 0.0),
        Knot::new(4.0, 3.0),
        Knot::new(5.0, 1.0),
        Knot::new(6.0, 1.0),
    ];

    let spline = Spline::new(knots).unwrap();

    let number_of_steps = 60;
    let step = (spline.max_x() - spline.min_x()) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = spline.min_x() + step * i as f64;
        println!("{:.2};{:.2}", x, spline.interpolate(x).unwrap());
    }
}
