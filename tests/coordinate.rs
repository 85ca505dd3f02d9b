use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use bevy_message_visualizations::{
    CardinalDirection,
    Compass,
    ConversionDirection,
    CoordinateFrame,
    CoordinateSpaceError,
    GeometryCompass,
};

use _harness::{
    EPSILON,
    random_rotations,
    random_vectors,
    same_rotation,
    test_harness_app,
};



const FIXED_FRAMES: [CoordinateFrame; 5] = [
    CoordinateFrame::Ruf,
    CoordinateFrame::Flu,
    CoordinateFrame::Frd,
    CoordinateFrame::NedLocal,
    CoordinateFrame::EnuLocal,
];

const NORTH: CardinalDirection = CardinalDirection::North;


#[test]
fn test_ruf_is_identity() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);

    assert_eq!(CoordinateFrame::Ruf.convert_from_ruf(v, &NORTH), v);
    assert_eq!(CoordinateFrame::Ruf.convert_to_ruf(v, &NORTH), v);
    assert_eq!(CoordinateFrame::Ruf.convert_quat_from_ruf(q, &NORTH), q);
    assert_eq!(CoordinateFrame::Ruf.convert_quat_to_ruf(q, &NORTH), q);
}

#[test]
fn test_fixed_vector_rules() {
    let v = Vec3::new(1.0, 2.0, 3.0);

    assert_eq!(CoordinateFrame::Flu.convert_from_ruf(v, &NORTH), Vec3::new(3.0, -1.0, 2.0));
    assert_eq!(CoordinateFrame::Flu.convert_to_ruf(v, &NORTH), Vec3::new(-2.0, 3.0, 1.0));
    assert_eq!(CoordinateFrame::Frd.convert_from_ruf(v, &NORTH), Vec3::new(3.0, 1.0, -2.0));
    assert_eq!(CoordinateFrame::Frd.convert_to_ruf(v, &NORTH), Vec3::new(2.0, -3.0, 1.0));
}

#[test]
fn test_fixed_quaternion_rules() {
    let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);

    assert_eq!(
        CoordinateFrame::Flu.convert_quat_from_ruf(q, &NORTH),
        Quat::from_xyzw(0.3, -0.1, 0.2, -0.9),
    );
    assert_eq!(
        CoordinateFrame::Flu.convert_quat_to_ruf(q, &NORTH),
        Quat::from_xyzw(-0.2, 0.3, 0.1, -0.9),
    );
    assert_eq!(
        CoordinateFrame::Frd.convert_quat_from_ruf(q, &NORTH),
        Quat::from_xyzw(0.3, 0.1, -0.2, -0.9),
    );
    assert_eq!(
        CoordinateFrame::Frd.convert_quat_to_ruf(q, &NORTH),
        Quat::from_xyzw(0.2, -0.3, 0.1, -0.9),
    );
}

#[test]
fn test_fixed_frame_round_trip() {
    for frame in FIXED_FRAMES {
        for v in random_vectors(200) {
            let round_trip = frame.convert_to_ruf(frame.convert_from_ruf(v, &NORTH), &NORTH);
            assert!(round_trip.abs_diff_eq(v, EPSILON), "{frame}: {v} -> {round_trip}");
        }

        for q in random_rotations(200) {
            let round_trip = frame.convert_quat_to_ruf(frame.convert_quat_from_ruf(q, &NORTH), &NORTH);
            assert!(same_rotation(round_trip, q), "{frame}: {q} -> {round_trip}");
        }
    }
}

#[test]
fn test_local_frames_alias_body_frames() {
    let vectors = random_vectors(100);
    let rotations = random_rotations(100);

    for (local, body) in [
        (CoordinateFrame::EnuLocal, CoordinateFrame::Flu),
        (CoordinateFrame::NedLocal, CoordinateFrame::Frd),
    ] {
        for &v in &vectors {
            assert_eq!(local.convert_from_ruf(v, &NORTH), body.convert_from_ruf(v, &NORTH));
            assert_eq!(local.convert_to_ruf(v, &NORTH), body.convert_to_ruf(v, &NORTH));
        }

        for &q in &rotations {
            assert_eq!(local.convert_quat_from_ruf(q, &NORTH), body.convert_quat_from_ruf(q, &NORTH));
            assert_eq!(local.convert_quat_to_ruf(q, &NORTH), body.convert_quat_to_ruf(q, &NORTH));
        }
    }
}

#[test]
fn test_local_frames_ignore_compass() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let east = CardinalDirection::East;

    for frame in FIXED_FRAMES {
        assert!(!frame.uses_compass());
        assert_eq!(frame.convert_from_ruf(v, &east), frame.convert_from_ruf(v, &NORTH));
        assert_eq!(frame.convert_to_ruf(v, &east), frame.convert_to_ruf(v, &NORTH));
    }
}

#[test]
fn test_geographic_frames_facing_north() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);

    assert!(CoordinateFrame::Enu.convert_from_ruf(v, &NORTH).abs_diff_eq(Vec3::new(1.0, 3.0, 2.0), EPSILON));
    assert!(
        CoordinateFrame::Ned
            .convert_from_ruf(v, &NORTH)
            .abs_diff_eq(CoordinateFrame::Frd.convert_from_ruf(v, &NORTH), EPSILON)
    );
    assert!(
        CoordinateFrame::Ned
            .convert_quat_from_ruf(q, &NORTH)
            .abs_diff_eq(CoordinateFrame::Frd.convert_quat_from_ruf(q, &NORTH), EPSILON)
    );
}

#[test]
fn test_geographic_frames_follow_heading() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let east = CardinalDirection::East;

    // forward (+Z) now points east, right (+X) points south
    assert!(CoordinateFrame::Enu.convert_from_ruf(v, &east).abs_diff_eq(Vec3::new(3.0, -1.0, 2.0), EPSILON));
    assert!(CoordinateFrame::Ned.convert_from_ruf(v, &east).abs_diff_eq(Vec3::new(-1.0, 3.0, -2.0), EPSILON));

    let south = CardinalDirection::South;
    assert!(CoordinateFrame::Enu.convert_from_ruf(v, &south).abs_diff_eq(Vec3::new(-1.0, -3.0, 2.0), EPSILON));

    let west = CardinalDirection::West;
    assert!(CoordinateFrame::Enu.convert_from_ruf(v, &west).abs_diff_eq(Vec3::new(-3.0, 1.0, 2.0), EPSILON));
}

#[test]
fn test_geographic_round_trip_at_fixed_heading() {
    for heading in [0.0, 0.3, FRAC_PI_2, 2.5, -1.2] {
        let compass = GeometryCompass { heading };

        for frame in [CoordinateFrame::Enu, CoordinateFrame::Ned] {
            assert!(frame.uses_compass());

            for v in random_vectors(100) {
                let round_trip = frame.convert_to_ruf(frame.convert_from_ruf(v, &compass), &compass);
                assert!(round_trip.abs_diff_eq(v, 1e-4), "{frame} @ {heading}: {v} -> {round_trip}");
            }

            for q in random_rotations(100) {
                let round_trip = frame.convert_quat_to_ruf(frame.convert_quat_from_ruf(q, &compass), &compass);
                assert!(same_rotation(round_trip, q), "{frame} @ {heading}: {q} -> {round_trip}");
            }
        }
    }
}

#[test]
fn test_quaternion_conversion_preserves_rotation() {
    let compass = GeometryCompass::from_degrees(37.0);

    for frame in CoordinateFrame::ALL {
        for (q, v) in random_rotations(50).into_iter().zip(random_vectors(50)) {
            let rotated_then_converted = frame.convert_from_ruf(q * v, &compass);
            let converted_then_rotated = frame.convert_quat_from_ruf(q, &compass)
                * frame.convert_from_ruf(v, &compass);

            assert!(
                rotated_then_converted.abs_diff_eq(converted_then_rotated, 1e-3),
                "{frame}: {rotated_then_converted} != {converted_then_rotated}",
            );
        }
    }
}

#[test]
fn test_direction_dispatch() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let q = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);
    let compass = GeometryCompass::from(CardinalDirection::West);

    for frame in CoordinateFrame::ALL {
        assert_eq!(
            frame.convert_vec3(v, ConversionDirection::FromCanonical, &compass),
            frame.convert_from_ruf(v, &compass),
        );
        assert_eq!(
            frame.convert_vec3(v, ConversionDirection::ToCanonical, &compass),
            frame.convert_to_ruf(v, &compass),
        );
        assert_eq!(
            frame.convert_quat(q, ConversionDirection::FromCanonical, &compass),
            frame.convert_quat_from_ruf(q, &compass),
        );
        assert_eq!(
            frame.convert_quat(q, ConversionDirection::ToCanonical, &compass),
            frame.convert_quat_to_ruf(q, &compass),
        );
    }
}

#[test]
fn test_unknown_selection_falls_back_to_ruf() {
    assert_eq!(
        CoordinateFrame::try_from(7u8),
        Err(CoordinateSpaceError::UnknownFrame("7".to_string())),
    );
    assert_eq!(CoordinateFrame::resolve_or_ruf(42), CoordinateFrame::Ruf);

    let err = "XYZ".parse::<CoordinateFrame>().unwrap_err();
    assert_eq!(err.to_string(), "invalid coordinate space: XYZ");
    assert_eq!(CoordinateFrame::parse_or_ruf("XYZ"), CoordinateFrame::Ruf);
}

#[test]
fn test_selection_lookup() {
    for frame in CoordinateFrame::ALL {
        let raw: u8 = frame.into();
        assert_eq!(CoordinateFrame::try_from(raw), Ok(frame));
        assert_eq!(CoordinateFrame::resolve_or_ruf(raw), frame);
        assert_eq!(frame.name().parse::<CoordinateFrame>(), Ok(frame));
    }

    assert_eq!(CoordinateFrame::try_from(4u8), Ok(CoordinateFrame::Enu));
    assert_eq!("enulocal".parse::<CoordinateFrame>(), Ok(CoordinateFrame::EnuLocal));
    assert_eq!(CoordinateFrame::parse_or_ruf(" ned "), CoordinateFrame::Ned);
}

#[test]
fn test_compass_rotation_points_north() {
    for degrees in [0.0, 45.0, 90.0, 200.0] {
        let compass = GeometryCompass::from_degrees(degrees);
        let north = CoordinateFrame::Enu.convert_to_ruf(Vec3::Y, &compass);

        assert!((compass.rotation() * Vec3::Z).abs_diff_eq(north, EPSILON));
    }
}

#[test]
fn test_cardinal_headings() {
    assert_eq!(CardinalDirection::North.heading(), 0.0);
    assert_eq!(CardinalDirection::East.heading(), FRAC_PI_2);
    assert_eq!(GeometryCompass::from(CardinalDirection::East).heading(), FRAC_PI_2);

    let mut compass = GeometryCompass::default();
    compass.set_heading_degrees(180.0);
    assert!((compass.heading() - CardinalDirection::South.heading()).abs() < EPSILON);
}

#[test]
fn test_plugin_provides_compass() {
    let mut app = test_harness_app();
    app.update();

    let compass = app.world().resource::<GeometryCompass>();
    assert_eq!(compass.heading(), 0.0);
}
