//! Watch an inscribed polygon family close in on its circle.
//!
//! Usage:
//!   cargo run -p ngon --example circle_limit -- [max_edges] [circumradius]
//!
//! Prints one row per family member (edge count, area, perimeter,
//! efficiency), then the circle the family is inscribed in, then the
//! member the family considers most circle-like. Defaults: 24 edges,
//! radius 6.

use std::f64::consts::PI;

use ngon::PolygonSequence;

fn main() {
    let max_edges = std::env::args()
        .nth(1)
        .map(|raw| raw.parse().expect("max_edges must be an integer"))
        .unwrap_or(24);
    let circumradius = std::env::args()
        .nth(2)
        .map(|raw| raw.parse().expect("circumradius must be a number"))
        .unwrap_or(6.0);

    let seq = match PolygonSequence::new(max_edges, circumradius) {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("circle_limit: {err}");
            eprintln!("usage: circle_limit [max_edges] [circumradius]");
            std::process::exit(1);
        }
    };

    println!("{seq}");
    println!("{:>6} {:>14} {:>14} {:>12}", "edges", "area", "perimeter", "efficiency");
    for p in seq.clone() {
        println!(
            "{:>6} {:>14.6} {:>14.6} {:>12.6}",
            p.edge_count(),
            p.area(),
            p.perimeter(),
            p.efficiency()
        );
    }
    println!(
        "{:>6} {:>14.6} {:>14.6} {:>12.6}",
        "circle",
        PI * circumradius * circumradius,
        2.0 * PI * circumradius,
        circumradius / 2.0
    );

    if let Some(best) = seq.max_efficiency_polygon() {
        println!("max efficiency: {best}");
    }
}
