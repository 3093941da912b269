//! Unit tests for pm-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(51.5, -0.1);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(51.5, -0.1);
        let b = GeoPoint::new(51.5012, -0.0985);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn hundred_metres_north() {
        // 0.0009° of latitude ≈ 100 m
        let a = GeoPoint::new(51.5, -0.1);
        let b = GeoPoint::new(51.5009, -0.1);
        let d = a.distance_m(b);
        assert!((d - 100.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = GeoPoint::new(51.5, -0.1);
        let north = GeoPoint::new(51.501, -0.1);
        let east = GeoPoint::new(51.5, -0.099);
        let south = GeoPoint::new(51.499, -0.1);
        let west = GeoPoint::new(51.5, -0.101);

        let n = origin.bearing_deg(north);
        assert!(n < 0.01 || n > 359.99, "north got {n}");
        assert!((origin.bearing_deg(east) - 90.0).abs() < 0.01);
        assert!((origin.bearing_deg(south) - 180.0).abs() < 0.01);
        assert!((origin.bearing_deg(west) - 270.0).abs() < 0.01);
    }

    #[test]
    fn bearing_coincident_points_is_finite() {
        let p = GeoPoint::new(51.5, -0.1);
        let b = p.bearing_deg(p);
        assert!(b.is_finite());
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn midpoint_is_halfway() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(12.0, 24.0);
        assert_eq!(a.midpoint(b), GeoPoint::new(11.0, 22.0));
    }

    #[test]
    fn normalize_degrees_wraps() {
        use crate::geo::normalize_degrees;
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(51.5, -0.1).to_string(), "(51.500000, -0.100000)");
    }
}

#[cfg(test)]
mod projection {
    use crate::{GeoPoint, LocalOffset};

    #[test]
    fn north_offset_moves_latitude_only() {
        let origin = GeoPoint::new(51.5, -0.1);
        let p = origin.from_offset(LocalOffset::new(0.0, 111.32));
        assert!((p.lat - 51.501).abs() < 1e-12);
        assert_eq!(p.lng, origin.lng);
    }

    #[test]
    fn east_offset_scales_with_latitude() {
        let origin = GeoPoint::new(60.0, 10.0);
        // cos(60°) = 0.5 → 55.66 m east is 0.001°
        let p = origin.from_offset(LocalOffset::new(55.66, 0.0));
        assert!((p.lng - 10.001).abs() < 1e-9, "got {}", p.lng);
    }

    #[test]
    fn offset_roundtrip() {
        let origin = GeoPoint::new(51.5, -0.1);
        let offset = LocalOffset::new(-36.5, 18.2);
        let back = origin.to_offset(origin.from_offset(offset));
        assert!((back.dx - offset.dx).abs() < 1e-9);
        assert!((back.dy - offset.dy).abs() < 1e-9);
    }

    #[test]
    fn projected_distance_agrees_with_haversine() {
        let origin = GeoPoint::new(51.5, -0.1);
        let offset = LocalOffset::new(60.0, 80.0);
        let p = origin.from_offset(offset);
        let d = origin.distance_m(p);
        // 111 320 m/deg vs. the haversine sphere's ~111 195 m/deg: ~0.11 % short.
        assert!((d - 100.0).abs() < 0.2, "got {d}");
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = LocalOffset::new(1.0, 0.0).rotated(std::f64::consts::FRAC_PI_2);
        assert!(r.dx.abs() < 1e-12);
        assert!((r.dy - 1.0).abs() < 1e-12);
        assert!((LocalOffset::new(3.0, 4.0).rotated(1.234).length() - 5.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod units {
    use crate::{YARDS_TO_METERS, Yards};

    #[test]
    fn yards_to_metres() {
        assert_eq!(YARDS_TO_METERS, 0.9144);
        assert!((Yards(40.0).to_meters() - 36.576).abs() < 1e-12);
        assert!(!Yards::ZERO.is_positive());
        assert!(Yards(0.5).is_positive());
        assert!(!Yards(-1.0).is_positive());
    }
}

#[cfg(test)]
mod rotation {
    use crate::Rotation;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Rotation::new(-15).degrees(), 0);
        assert_eq!(Rotation::new(360).degrees(), 359);
        assert_eq!(Rotation::new(720).degrees(), 359);
        assert_eq!(Rotation::new(45).degrees(), 45);
    }

    #[test]
    fn from_f64_rounds_and_clamps() {
        assert_eq!(Rotation::from_f64(44.6).degrees(), 45);
        assert_eq!(Rotation::from_f64(-0.4).degrees(), 0);
        assert_eq!(Rotation::from_f64(1e9).degrees(), 359);
        assert_eq!(Rotation::from_f64(f64::NAN).degrees(), 0);
    }

    #[test]
    fn parse_clamped() {
        assert_eq!(Rotation::parse_clamped(" 400 ").unwrap(), Rotation::new(359));
        assert_eq!(Rotation::parse_clamped("12.4").unwrap(), Rotation::new(12));
        assert!(matches!(Rotation::parse_clamped("north"), Err(crate::CoreError::Parse(_))));
    }

    #[test]
    fn radians() {
        assert!((Rotation::new(180).radians() - std::f64::consts::PI).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::UnixMillis;

    #[test]
    fn now_is_after_2020() {
        assert!(UnixMillis::now().as_secs() > 1_577_836_800);
    }

    #[test]
    fn ordering_and_secs() {
        assert!(UnixMillis(1_000) < UnixMillis(2_000));
        assert_eq!(UnixMillis(2_999).as_secs(), 2);
        assert_eq!(UnixMillis(-1).as_secs(), -1);
    }
}
