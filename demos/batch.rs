extern crate elevation_spline;

use elevation_spline::Spline;

fn main() {
    let xs = [0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let ys = [1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = Spline::from_xy(&xs, &ys).unwrap();

    println!("x;y");
    for (x, y) in spline.sample(61).unwrap() {
        println!("{:.2};{:.2}", x, y);
    }

    println!();
    for (i, segment) in spline.coefficients().iter().enumerate() {
        println!("{};{:.4};{:.4};{:.4};{:.4}", i, segment.a, segment.b, segment.c, segment.d);
    }
}
