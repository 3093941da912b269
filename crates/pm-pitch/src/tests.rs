//! Unit tests for pm-pitch.

use pm_core::{GeoPoint, Rotation};

use crate::{PitchConfig, PitchSize};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn london() -> GeoPoint {
    GeoPoint::new(51.5000, -0.1000)
}

fn five() -> PitchConfig {
    PitchSize::FiveASide.config()
}

fn nine() -> PitchConfig {
    PitchSize::NineASide.config()
}

/// Haversine on a 6 371 km sphere reads ~0.11 % shorter than the 111 320 m/deg
/// projection, so side lengths are compared with a relative tolerance.
fn assert_close_rel(actual: f64, expected: f64, what: &str) {
    let rel = (actual - expected).abs() / expected;
    assert!(rel < 2e-3, "{what}: expected ≈{expected}, got {actual}");
}

/// Interior angle at `b` in degrees, measured in the local plane.
fn angle_at(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    let ba = b.to_offset(a);
    let bc = b.to_offset(c);
    let dot = ba.dx * bc.dx + ba.dy * bc.dy;
    (dot / (ba.length() * bc.length())).acos().to_degrees()
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use pm_core::Yards;

    use super::*;
    use crate::{PitchCatalog, PitchError};

    #[test]
    fn builtins_are_valid() {
        for size in PitchSize::ALL {
            size.config().validate().unwrap();
        }
    }

    #[test]
    fn goal_area_presence() {
        assert!(!PitchSize::FiveASide.config().has_goal_area());
        assert!(!PitchSize::SevenASide.config().has_goal_area());
        assert!(PitchSize::NineASide.config().has_goal_area());
        assert!(PitchSize::ElevenSenior.config().has_goal_area());
        assert_eq!(five().waypoint_count(), 10);
        assert_eq!(nine().waypoint_count(), 14);
    }

    #[test]
    fn size_keys_round_trip() {
        for size in PitchSize::ALL {
            assert_eq!(size.key().parse::<PitchSize>().unwrap(), size);
        }
        assert!(matches!("4v4".parse::<PitchSize>(), Err(PitchError::UnknownSize(_))));
    }

    #[test]
    fn goal_area_deeper_than_penalty_rejected() {
        let mut cfg = nine();
        cfg.goal_area_length = Yards(20.0);
        assert!(matches!(cfg.validate(), Err(PitchError::InvalidConfig { .. })));
    }

    #[test]
    fn goal_area_wider_than_penalty_rejected() {
        let mut cfg = nine();
        cfg.goal_area_width = Yards(40.0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_length_rejected() {
        let mut cfg = five();
        cfg.length = Yards::ZERO;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn half_zero_goal_area_means_no_goal_area() {
        let mut cfg = five();
        cfg.goal_area_width = Yards(6.0);
        assert!(!cfg.has_goal_area());
        cfg.validate().unwrap();
    }

    #[test]
    fn builtin_catalog_lookup() {
        let catalog = PitchCatalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("11v11-u15").unwrap().name, "11v11 U15-U16");
        assert!(catalog.get("3v3").is_err());
    }

    const CUSTOM_CSV: &str = "\
key,name,length,width,penalty_area_length,penalty_area_width,goal_area_length,goal_area_width,penalty_spot_distance,center_circle_radius\n\
6v6,6v6 Small Sided,50,35,9,18,0,0,7,5\n\
8v8,8v8 Youth,70,45,12,28,4,12,8,7\n\
";

    #[test]
    fn catalog_loads_csv() {
        let mut catalog = PitchCatalog::builtin();
        let added = catalog.load_reader(std::io::Cursor::new(CUSTOM_CSV)).unwrap();
        assert_eq!(added, 2);
        assert_eq!(catalog.len(), 8);
        let eight = catalog.get("8v8").unwrap();
        assert_eq!(eight.length, Yards(70.0));
        assert!(eight.has_goal_area());
    }

    #[test]
    fn catalog_rejects_invalid_row_atomically() {
        let csv = "\
key,name,length,width,penalty_area_length,penalty_area_width,goal_area_length,goal_area_width,penalty_spot_distance,center_circle_radius\n\
ok,Fine,50,35,9,18,0,0,7,5\n\
bad,Broken,50,35,9,18,12,10,7,5\n\
";
        let mut catalog = PitchCatalog::new();
        assert!(catalog.load_reader(std::io::Cursor::new(csv)).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn catalog_rejects_malformed_csv() {
        let csv = "key,name,length\nx,y,not-a-number\n";
        let mut catalog = PitchCatalog::new();
        assert!(matches!(
            catalog.load_reader(std::io::Cursor::new(csv)),
            Err(PitchError::Csv(_))
        ));
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use rstest::rstest;

    use super::*;
    use crate::{CornerRole, PitchCorners, PitchError, box_corners, center_from_corner, pitch_corners};

    #[rstest]
    fn corners_form_rectangle(
        #[values(0, 45, 90, 180, 359)] degrees: i64,
        #[values(PitchSize::FiveASide, PitchSize::NineASide, PitchSize::ElevenSenior)] size: PitchSize,
    ) {
        let cfg = size.config();
        let c = pitch_corners(london(), &cfg, Rotation::new(degrees));
        let [c0, c1, c2, c3] = *c.as_array();
        let length_m = cfg.length.to_meters();
        let width_m = cfg.width.to_meters();

        assert_close_rel(c0.distance_m(c1), length_m, "bottom touchline");
        assert_close_rel(c1.distance_m(c2), width_m, "right goal line");
        assert_close_rel(c2.distance_m(c3), length_m, "top touchline");
        assert_close_rel(c3.distance_m(c0), width_m, "left goal line");

        for (a, b, c) in [(c3, c0, c1), (c0, c1, c2), (c1, c2, c3), (c2, c3, c0)] {
            let angle = angle_at(a, b, c);
            assert!((angle - 90.0).abs() < 0.01, "angle {angle} at rotation {degrees}");
        }
    }

    #[rstest]
    fn center_from_corner_round_trips(
        #[values(0, 17, 90, 200, 359)] degrees: i64,
        #[values(CornerRole::BottomLeft, CornerRole::BottomRight, CornerRole::TopRight, CornerRole::TopLeft)]
        role: CornerRole,
    ) {
        let cfg = nine();
        let rotation = Rotation::new(degrees);
        let corners = pitch_corners(london(), &cfg, rotation);
        let center = center_from_corner(corners.get(role), &cfg, rotation, role);
        let err = center.distance_m(london());
        assert!(err < 0.01, "round trip off by {err} m for {role} at {degrees}°");
    }

    #[test]
    fn five_a_side_scenario() {
        let cfg = five();
        let corners = pitch_corners(london(), &cfg, Rotation::ZERO);
        let bl = corners.get(CornerRole::BottomLeft);

        // half-length 18.288 m west, half-width 13.716 m south
        let offset = london().to_offset(bl);
        assert!((offset.dx + 18.288).abs() < 1e-6, "dx {}", offset.dx);
        assert!((offset.dy + 13.716).abs() < 1e-6, "dy {}", offset.dy);
        assert!(bl.lat < london().lat && bl.lng < london().lng);

        let diagonal = (18.288f64.powi(2) + 13.716f64.powi(2)).sqrt();
        assert_close_rel(london().distance_m(bl), diagonal, "centre to corner");
    }

    #[test]
    fn rotation_quarter_turn_swaps_axes() {
        let cfg = five();
        let corners = pitch_corners(london(), &cfg, Rotation::new(90));
        // At 90° the length axis points north: bottom-left sits south-east.
        let offset = london().to_offset(corners.get(CornerRole::BottomLeft));
        assert!((offset.dx - 13.716).abs() < 1e-6);
        assert!((offset.dy + 18.288).abs() < 1e-6);
    }

    #[test]
    fn corner_centroid_is_center() {
        let corners = pitch_corners(london(), &nine(), Rotation::new(33));
        assert!(corners.center().distance_m(london()) < 0.01);
    }

    #[test]
    fn penalty_box_geometry() {
        let cfg = nine();
        let corners = pitch_corners(london(), &cfg, Rotation::ZERO);
        let pb = box_corners(&corners, cfg.penalty_area_length, cfg.penalty_area_width, Rotation::ZERO);

        let depth = cfg.penalty_area_length.to_meters();
        let half = cfg.penalty_area_width.to_meters() / 2.0;
        let half_length = cfg.length.to_meters() / 2.0;

        // `bottom` is the +width end at both goals.
        let lb = london().to_offset(pb.left.bottom);
        assert!((lb.dx - (-half_length + depth)).abs() < 1e-3, "lb.dx {}", lb.dx);
        assert!((lb.dy - half).abs() < 1e-3, "lb.dy {}", lb.dy);

        let lt = london().to_offset(pb.left.top);
        assert!((lt.dy + half).abs() < 1e-3);

        let rb = london().to_offset(pb.right.bottom);
        assert!((rb.dx - (half_length - depth)).abs() < 1e-3);
        assert!((rb.dy - half).abs() < 1e-3);

        assert_close_rel(pb.left.bottom.distance_m(pb.left.top), 2.0 * half, "box width");
    }

    #[test]
    fn box_bottom_label_follows_width_axis() {
        // Stored sites label the +width end `bottom`: on an unrotated 9v9 the
        // left penalty box `bottom` corner lies 14.4 m from TL and 39.3 m from BL.
        let cfg = nine();
        let corners = pitch_corners(london(), &cfg, Rotation::ZERO);
        let pb = box_corners(&corners, cfg.penalty_area_length, cfg.penalty_area_width, Rotation::ZERO);

        let tl = corners.get(CornerRole::TopLeft);
        let bl = corners.get(CornerRole::BottomLeft);
        assert_close_rel(pb.left.bottom.distance_m(tl), 14.44, "left.bottom to TL");
        assert_close_rel(pb.left.bottom.distance_m(bl), 39.29, "left.bottom to BL");
        assert!(pb.left.top.distance_m(bl) < pb.left.top.distance_m(tl));

        let tr = corners.get(CornerRole::TopRight);
        let br = corners.get(CornerRole::BottomRight);
        assert!(pb.right.bottom.distance_m(tr) < pb.right.bottom.distance_m(br));
        assert!(pb.right.top.distance_m(br) < pb.right.top.distance_m(tr));
    }

    #[test]
    fn box_sides_stay_symmetric_under_rotation() {
        let cfg = nine();
        let rotation = Rotation::new(123);
        let corners = pitch_corners(london(), &cfg, rotation);
        let gb = box_corners(&corners, cfg.goal_area_length, cfg.goal_area_width, rotation);

        // both `bottom` corners sit on the corner-2/3 touchline side
        let top_mid = corners.halfway_top();
        assert!(gb.left.bottom.distance_m(top_mid) < gb.left.top.distance_m(top_mid));
        assert!(gb.right.bottom.distance_m(top_mid) < gb.right.top.distance_m(top_mid));

        // inward depth measured from the goal-line midpoint
        let depth = cfg.goal_area_length.to_meters();
        let inner_left = gb.left.bottom.midpoint(gb.left.top);
        assert_close_rel(inner_left.distance_m(corners.left_goal_center()), depth, "left depth");
        let inner_right = gb.right.bottom.midpoint(gb.right.top);
        assert_close_rel(inner_right.distance_m(corners.right_goal_center()), depth, "right depth");
    }

    #[test]
    fn penalty_spots_lie_inside() {
        let cfg = nine();
        let corners = pitch_corners(london(), &cfg, Rotation::new(10));
        let (left, right) = crate::penalty_spots(&corners, &cfg, Rotation::new(10));
        let spot = cfg.penalty_spot_distance.to_meters();
        assert_close_rel(left.distance_m(corners.left_goal_center()), spot, "left spot");
        assert_close_rel(right.distance_m(corners.right_goal_center()), spot, "right spot");
    }

    #[test]
    fn from_points_accepts_engine_output() {
        let corners = pitch_corners(london(), &nine(), Rotation::new(271));
        let rebuilt = PitchCorners::from_points(*corners.as_array()).unwrap();
        assert_eq!(rebuilt, corners);
    }

    #[test]
    fn from_points_rejects_reordered_corners() {
        let [a, b, c, d] = *pitch_corners(london(), &nine(), Rotation::ZERO).as_array();
        assert!(matches!(PitchCorners::from_points([a, d, c, b]), Err(PitchError::CornerOrder)));
        let nan = GeoPoint::new(f64::NAN, 0.0);
        assert!(PitchCorners::from_points([nan, b, c, d]).is_err());
    }

    #[test]
    fn corner_role_parsing() {
        for role in CornerRole::ALL {
            assert_eq!(role.as_str().parse::<CornerRole>().unwrap(), role);
            assert_eq!(CornerRole::ALL[role.index()], role);
        }
        assert!("middle".parse::<CornerRole>().is_err());
    }
}

// ── Waypoints ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod waypoints {
    use super::*;
    use crate::{WaypointKind, generate_waypoints, pitch_corners};

    const NAMES_14: [&str; 14] = [
        "Corner 1 (Bottom-Left)",
        "Corner 2 (Bottom-Right)",
        "Corner 3 (Top-Right)",
        "Corner 4 (Top-Left)",
        "Halfway Line (Bottom)",
        "Halfway Line (Top)",
        "Left Penalty Area (Bottom)",
        "Left Penalty Area (Top)",
        "Right Penalty Area (Bottom)",
        "Right Penalty Area (Top)",
        "Left Goal Area (Bottom)",
        "Left Goal Area (Top)",
        "Right Goal Area (Bottom)",
        "Right Goal Area (Top)",
    ];

    #[test]
    fn five_a_side_has_ten() {
        let cfg = five();
        let corners = pitch_corners(london(), &cfg, Rotation::ZERO);
        let wps = generate_waypoints(&corners, &cfg, Rotation::ZERO);
        assert_eq!(wps.len(), 10);
        assert!(wps.iter().all(|w| w.kind != WaypointKind::Goal));
        let names: Vec<_> = wps.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, NAMES_14[..10]);
    }

    #[test]
    fn nine_a_side_has_fourteen_in_order() {
        let cfg = nine();
        let rotation = Rotation::new(30);
        let corners = pitch_corners(london(), &cfg, rotation);
        let wps = generate_waypoints(&corners, &cfg, rotation);
        let names: Vec<_> = wps.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, NAMES_14);

        let kinds: Vec<_> = wps.iter().map(|w| w.kind).collect();
        assert_eq!(&kinds[..4], &[WaypointKind::Corner; 4]);
        assert_eq!(&kinds[4..6], &[WaypointKind::Halfway; 2]);
        assert_eq!(&kinds[6..10], &[WaypointKind::Penalty; 4]);
        assert_eq!(&kinds[10..], &[WaypointKind::Goal; 4]);
    }

    #[test]
    fn corner_waypoints_match_corners() {
        let cfg = nine();
        let corners = pitch_corners(london(), &cfg, Rotation::new(77));
        let wps = generate_waypoints(&corners, &cfg, Rotation::new(77));
        for (wp, corner) in wps.iter().zip(corners.iter()) {
            assert_eq!(wp.point(), corner);
        }
        assert_eq!(wps[4].point(), corners.halfway_bottom());
        assert_eq!(wps[5].point(), corners.halfway_top());
    }

    #[test]
    fn generation_is_deterministic() {
        let cfg = PitchSize::ElevenU13.config();
        let corners = pitch_corners(london(), &cfg, Rotation::new(12));
        let a = generate_waypoints(&corners, &cfg, Rotation::new(12));
        let b = generate_waypoints(&corners, &cfg, Rotation::new(12));
        assert_eq!(a, b);
    }

    #[test]
    fn names_are_unique() {
        let cfg = nine();
        let corners = pitch_corners(london(), &cfg, Rotation::ZERO);
        let wps = generate_waypoints(&corners, &cfg, Rotation::ZERO);
        let mut names: Vec<_> = wps.iter().map(|w| w.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), wps.len());
    }
}

// ── Anchor / placement ────────────────────────────────────────────────────────

#[cfg(test)]
mod anchor {
    use pm_core::CoreError;

    use super::*;
    use crate::{Anchor, CornerRole, PitchError, PitchPlacement};

    #[test]
    fn empty_placement_is_not_ready() {
        let p = PitchPlacement::new();
        assert!(matches!(p.corners(), Err(PitchError::Core(CoreError::NotReady(_)))));
        assert!(p.waypoints().is_err());

        let mut p = PitchPlacement::new();
        p.select_config(five());
        assert!(p.center().is_err(), "anchor still missing");
        p.move_center(london());
        assert_eq!(p.waypoints().unwrap().len(), 10);
    }

    #[test]
    fn lock_and_unlock_preserve_geometry() {
        let mut p = PitchPlacement::centered(nine(), london(), Rotation::new(40));
        let before = p.corners().unwrap();

        p.lock_corner(CornerRole::TopRight).unwrap();
        assert_eq!(p.anchor().unwrap().corner_role(), Some(CornerRole::TopRight));
        let locked = p.corners().unwrap();
        for (a, b) in before.iter().zip(locked.iter()) {
            assert!(a.distance_m(b) < 0.01);
        }

        p.unlock_corner().unwrap();
        assert!(matches!(p.anchor(), Some(Anchor::Center(_))));
        assert!(p.center().unwrap().distance_m(london()) < 0.01);
    }

    #[test]
    fn corner_lock_tracks_fix() {
        let mut p = PitchPlacement::centered(five(), london(), Rotation::ZERO);
        assert!(!p.track_corner(london()), "centre mode ignores corner fixes");

        p.lock_corner(CornerRole::BottomLeft).unwrap();
        let fix = GeoPoint::new(51.5003, -0.1004);
        assert!(p.track_corner(fix));
        let corners = p.corners().unwrap();
        assert!(corners.get(CornerRole::BottomLeft).distance_m(fix) < 0.01);
        assert!(!p.move_center(london()), "corner lock blocks dragging");
    }

    #[test]
    fn rotating_in_corner_mode_pivots_on_corner() {
        let mut p = PitchPlacement::centered(five(), london(), Rotation::ZERO);
        p.lock_corner(CornerRole::BottomLeft).unwrap();
        let pivot = p.corners().unwrap().get(CornerRole::BottomLeft);

        p.set_rotation_degrees(75);
        let after = p.corners().unwrap().get(CornerRole::BottomLeft);
        assert!(pivot.distance_m(after) < 0.01);
        assert!(p.center().unwrap().distance_m(london()) > 1.0);
    }

    #[test]
    fn rotation_input_is_clamped() {
        let mut p = PitchPlacement::centered(five(), london(), Rotation::ZERO);
        p.set_rotation_degrees(500);
        assert_eq!(p.rotation().degrees(), 359);
        p.set_rotation_degrees(-20);
        assert_eq!(p.rotation().degrees(), 0);
    }

    #[test]
    fn anchor_conversions_are_total() {
        let cfg = nine();
        let rotation = Rotation::new(210);
        let center = Anchor::Center(london());
        for role in CornerRole::ALL {
            let corner = center.to_corner(role, &cfg, rotation);
            assert_eq!(corner.corner_role(), Some(role));
            let back = corner.to_center(&cfg, rotation);
            assert!(back.center(&cfg, rotation).distance_m(london()) < 0.01);
            // re-locking the same role keeps the exact point
            assert_eq!(corner.to_corner(role, &cfg, rotation), corner);
        }
    }
}
