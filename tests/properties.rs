use proptest::prelude::*;
use pushover::{loop_area, PushoverModel, Regime, ResponseParameters};

fn parameters() -> impl Strategy<Value = ResponseParameters> {
    (1.0..1.0e6f64, 1.0..1.0e5f64, 1.0..10.0f64).prop_map(|(k_elastic, yield_force, ductility)| {
        ResponseParameters::new(k_elastic, yield_force, ductility)
    })
}

fn polygon() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 3..24)
}

fn split(vertices: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    vertices.iter().copied().unzip()
}

proptest! {
    #[test]
    fn displacement_is_non_decreasing_below_ultimate_load(
        parameters in parameters(),
        a in 0.0..1.0f64,
        b in 0.0..1.0f64,
    ) {
        let model = PushoverModel::new(parameters).unwrap();
        let ultimate = model.ultimate_load();
        let (lo, hi) = if a <= b {
            (a * ultimate, b * ultimate)
        } else {
            (b * ultimate, a * ultimate)
        };
        prop_assume!(hi < ultimate);
        prop_assert!(model.displacement(lo).unwrap() <= model.displacement(hi).unwrap());
    }

    #[test]
    fn displacement_is_constant_on_the_plateau(
        parameters in parameters(),
        excess in 1.0..100.0f64,
    ) {
        let model = PushoverModel::new(parameters).unwrap();
        let load = model.ultimate_load() * excess;
        prop_assert_eq!(model.regime(load).unwrap(), Regime::Saturated);
        prop_assert_eq!(model.displacement(load).unwrap(), model.ultimate_displacement());
    }

    #[test]
    fn displacement_is_non_negative_and_finite(
        parameters in parameters(),
        load in 0.0..1.0e7f64,
    ) {
        let displacement = PushoverModel::new(parameters).unwrap().displacement(load).unwrap();
        prop_assert!(displacement >= 0.0);
        prop_assert!(displacement.is_finite());
    }

    #[test]
    fn elastic_samples_never_exceed_the_plateau(
        parameters in parameters(),
        fraction in 0.0..=1.0f64,
    ) {
        let model = PushoverModel::new(parameters).unwrap();
        let load = fraction * model.parameters().yield_force;
        prop_assert!(model.displacement(load).unwrap() <= model.ultimate_displacement());
    }

    #[test]
    fn sequence_matches_scalar_evaluation(
        parameters in parameters(),
        loads in prop::collection::vec(0.0..1.0e6f64, 0..64),
    ) {
        let model = PushoverModel::new(parameters).unwrap();
        let displacements = model.displacements(&loads).unwrap();
        prop_assert_eq!(displacements.len(), loads.len());
        for (load, displacement) in loads.iter().zip(displacements) {
            prop_assert_eq!(displacement, model.displacement(*load).unwrap());
        }
    }

    #[test]
    fn loop_area_is_direction_independent(vertices in polygon()) {
        let (x, y) = split(&vertices);
        let forward = loop_area(&x, &y).unwrap();
        let reversed: Vec<_> = vertices.iter().rev().copied().collect();
        let (xr, yr) = split(&reversed);
        prop_assert!(forward >= 0.0);
        prop_assert!((forward - loop_area(&xr, &yr).unwrap()).abs() < 1.0e-6);
    }

    #[test]
    fn loop_area_is_rotation_independent(vertices in polygon(), shift in 0usize..24) {
        let (x, y) = split(&vertices);
        let forward = loop_area(&x, &y).unwrap();
        let mut rotated = vertices.clone();
        rotated.rotate_left(shift % vertices.len());
        let (xs, ys) = split(&rotated);
        prop_assert!((forward - loop_area(&xs, &ys).unwrap()).abs() < 1.0e-6);
    }
}
