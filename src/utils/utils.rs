//! Helper functions

/// Checks if all angles are finite
pub fn is_valid(qs: &[f64]) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Joint angles (degrees) as a single line like `[ 30.00 -10.00]`.
pub fn format_solution(qs: &[f64]) -> String {
    let mut row_str = String::new();
    for q in qs {
        row_str.push_str(&format!("{:6.2} ", q));
    }
    format!("[{}]", row_str.trim_end())
}

/// Print joint values in degrees.
pub fn dump_solution(qs: &[f64]) {
    if qs.is_empty() {
        println!("No joints");
        return;
    }
    println!("{}", format_solution(qs));
}

/// Brings the angle (degrees) into (-180, 180]. The solver never does this by itself, angles
/// accumulate freely over ticks.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}
