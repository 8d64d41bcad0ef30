use super::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Shoelace area over an explicit vertex loop, as an independent check
/// on the closed-form polygon area.
fn shoelace_area(verts: &[nalgebra::Vector2<f64>]) -> f64 {
    let mut twice_area = 0.0;
    for k in 0..verts.len() {
        let p = verts[k];
        let q = verts[(k + 1) % verts.len()];
        twice_area += p.x * q.y - p.y * q.x;
    }
    twice_area / 2.0
}

#[test]
fn area_matches_shoelace_over_random_polygons() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let edges = rng.gen_range(3usize..=64);
        let radius = rng.gen_range(0.1f64..50.0);
        let p = Polygon::new(edges, radius).unwrap();
        let reference = shoelace_area(&p.vertices());
        let tol = 1e-9 * reference.abs().max(1.0);
        assert!(
            (p.area() - reference).abs() < tol,
            "area mismatch at edges={edges} radius={radius}: {} vs {}",
            p.area(),
            reference
        );
    }
}

#[test]
fn interior_angle_increases_toward_180() {
    let mut previous = 0.0;
    for edges in 3usize..=720 {
        let p = Polygon::new(edges, 1.0).unwrap();
        let angle = p.interior_angle_deg();
        assert!(angle > previous);
        assert!(angle < 180.0);
        previous = angle;
    }
}

#[test]
fn many_edged_polygon_approaches_its_circle() {
    let radius = 6.0;
    let p = Polygon::new(720, radius).unwrap();
    let circle_area = std::f64::consts::PI * radius * radius;
    let circle_perimeter = 2.0 * std::f64::consts::PI * radius;
    assert!((p.area() - circle_area).abs() < 1e-2);
    assert!((p.perimeter() - circle_perimeter).abs() < 1e-2);
    // The circle bounds the inscribed polygon from above.
    assert!(p.area() < circle_area);
    assert!(p.perimeter() < circle_perimeter);
}

#[test]
fn mutated_polygon_matches_a_fresh_one() {
    let mut p = Polygon::new(3, 6.0).unwrap();
    p.set_edge_count(12).unwrap();
    p.set_circumradius(2.5).unwrap();
    let fresh = Polygon::new(12, 2.5).unwrap();
    assert_eq!(p.area(), fresh.area());
    assert_eq!(p.perimeter(), fresh.perimeter());
    assert_eq!(p.apothem(), fresh.apothem());
    assert_eq!(p.edge_length(), fresh.edge_length());
    assert_eq!(p.interior_angle_deg(), fresh.interior_angle_deg());
    assert_eq!(p.vertices(), fresh.vertices());
}

#[test]
fn sequence_members_match_standalone_polygons() {
    let seq = PolygonSequence::new(16, 4.0).unwrap();
    for (offset, edges) in (MIN_EDGES..=16).enumerate() {
        let member = seq.get(offset).unwrap();
        assert_eq!(member, Polygon::new(edges, 4.0).unwrap());
    }
}

#[test]
fn prelude_exposes_the_working_set() {
    use crate::prelude::*;
    let seq: PolygonSequence = PolygonSequence::new(MIN_EDGES, 1.0).unwrap();
    let p: Polygon = seq.get(0).unwrap();
    let err: PolygonError = PolygonError::TooFewEdges { got: 0 };
    let res: PolygonResult<Polygon> = Ok(p);
    assert!(res.is_ok());
    assert_ne!(err.to_string(), "");
}
