#[cfg(test)]
mod _tests_symmetry_groups {
    use super::super::crystal_systems::CrystalSystem;
    use super::super::symmetry_groups::Group;
    use super::super::symmetry_operations::Operation;
    use crate::config::MAX_GROUP_ORDER;
    use crate::errors::GroupConstructionError;
    use nalgebra::{Matrix3, Vector3};

    fn hall(symbol: &str) -> Group {
        Group::from_hall(symbol).unwrap()
    }

    fn op(code: &str) -> Operation {
        Operation::from_code(code).unwrap()
    }

    #[test]
    fn test_closure_orders() {
        let cases = [
            ("P 1", 1),
            ("-P 1", 2),
            ("P 2yb", 2),
            ("-P 2ybc", 4),
            ("P 2 -2", 4),
            ("P 6c", 6),
            ("-R 3", 18),
            ("-P 4 2 3", 48),
            ("F 4d 2 3 -1d", 192),
        ];
        for (symbol, order) in cases {
            assert_eq!(hall(symbol).order(), order, "{symbol}");
        }
    }

    #[test]
    fn test_closure_starts_with_identity_and_generators() {
        let group = hall("-P 2ybc");
        let codes: Vec<String> = group.operations().iter().map(|o| o.code()).collect();
        assert_eq!(
            codes,
            vec!["x,y,z", "-x,y+1/2,-z+1/2", "-x,-y,-z", "x,-y+1/2,z+1/2"]
        );
        // the duplicate identity of the centering list is dropped
        assert_eq!(group.generators().len(), 3);
    }

    #[test]
    fn test_closure_is_idempotent() {
        let group = hall("-I 4bd 2");
        let operations: Vec<Operation> = group.operations().iter().map(|o| o.unbounded()).collect();
        let reclosed = Group::new(&operations).unwrap();
        assert_eq!(reclosed, group);
        assert_eq!(reclosed.order(), group.order());
    }

    #[test]
    fn test_operations_are_bounded_and_closed() {
        let group = hall("-P 6 2c");
        for a in group.operations() {
            assert!(a.tl24().iter().all(|t| (0..24).contains(t)));
            for b in group.operations() {
                assert!(group.contains(&(**a * **b)));
            }
        }
    }

    #[test]
    fn test_equality_ignores_order() {
        let forward = Group::new(&[op("-x,-y,z"), op("x,-y,-z")]).unwrap();
        let backward = Group::new(&[op("x,-y,-z"), op("-x,-y,z")]).unwrap();
        assert_eq!(forward, backward);
        assert_ne!(forward, hall("P 2"));
    }

    #[test]
    fn test_non_crystallographic_generator_is_rejected() {
        let shear = Operation::new(Matrix3::new(1, 1, 0, 0, 1, 0, 0, 0, 1), Vector3::zeros());
        let error: GroupConstructionError = Group::new(&[shear]).unwrap_err();
        assert_eq!(error.limit, MAX_GROUP_ORDER);
        assert_eq!(error.generators, vec!["x+y,y,z".to_string()]);
    }

    #[test]
    fn test_generators_with_large_entries_are_rejected() {
        let stretch = Operation::new(Matrix3::new(2, 1, 0, 1, 1, 0, 0, 0, 1), Vector3::zeros());
        let error = Group::new(&[stretch]).unwrap_err();
        assert_eq!(error.limit, MAX_GROUP_ORDER);

        // a 3-fold and a 4-fold about c: their product has no finite period
        assert!(Group::new(&[op("-y,x-y,z"), op("-y,x,z")]).is_err());
    }

    #[test]
    fn test_crystal_systems() {
        let cases = [
            ("P 1", CrystalSystem::Triclinic),
            ("-P 2ybc", CrystalSystem::Monoclinic),
            ("P 2 -2", CrystalSystem::Orthorhombic),
            ("P 4 -2", CrystalSystem::Tetragonal),
            ("I -4 2", CrystalSystem::Tetragonal),
            ("-R 3", CrystalSystem::Trigonal),
            ("P 3*", CrystalSystem::Trigonal),
            ("P 6c", CrystalSystem::Hexagonal),
            ("-P 4 2 3", CrystalSystem::Cubic),
        ];
        for (symbol, system) in cases {
            assert_eq!(hall(symbol).system(), system, "{symbol}");
        }
    }

    #[test]
    fn test_polarity() {
        assert!(hall("P 1").is_polar());
        assert!(hall("P 2yb").is_polar());
        assert!(hall("P 2 -2").is_polar());
        assert!(hall("P 4 -2").is_polar());
        assert!(hall("P 6c").is_polar());
        assert!(!hall("-P 1").is_polar());
        assert!(!hall("P 2 2").is_polar());
        assert!(!hall("I -4 2").is_polar());
        assert!(!hall("-P 4 2 3").is_polar());
        assert!(!hall("P -6").is_polar());
        assert!(!hall("-P 3").is_polar());
        assert!(hall("P 6 -2").is_polar());
    }

    #[test]
    fn test_centrosymmetry_and_chirality() {
        let p21c = hall("-P 2ybc");
        assert!(p21c.is_centrosymmetric());
        assert!(!p21c.is_enantiomorphic());

        let p212121 = hall("P 2ac 2ab");
        assert!(!p212121.is_centrosymmetric());
        assert!(p212121.is_enantiomorphic());

        // inversion centre away from the origin still counts
        let shifted = hall("-P 2ybc (1 1 1)");
        assert!(shifted.is_centrosymmetric());
    }

    #[test]
    fn test_lauefy_adds_inversion() {
        let laue = hall("P 2yb").lauefy().unwrap();
        assert_eq!(laue.order(), 4);
        assert!(laue.is_centrosymmetric());
        assert!(laue.contains(&op("-x,y+1/2,-z")));
        assert!(laue.contains(&op("-x,-y,-z")));

        let already = hall("-P 1");
        assert_eq!(already.lauefy().unwrap(), already);
    }

    #[test]
    fn test_reciprocate_drops_translations() {
        let reciprocal = hall("-P 2ybc").reciprocate().unwrap();
        assert_eq!(reciprocal.order(), 4);
        assert!(reciprocal
            .operations()
            .iter()
            .all(|o| o.tl24() == Vector3::zeros()));
        assert_eq!(reciprocal, hall("-P 2y"));

        let hexagonal = hall("P 6c").reciprocate().unwrap();
        assert_eq!(hexagonal.order(), 6);
        assert_eq!(hexagonal.system(), CrystalSystem::Hexagonal);
    }

    #[test]
    fn test_systematic_absences_of_p21c() {
        let group = hall("-P 2ybc");
        for l in [1, 3, 5] {
            assert!(group.is_extinct(&Vector3::new(1, 0, l)));
            assert!(group.is_extinct(&Vector3::new(0, 0, l)));
        }
        for k in [1, 3] {
            assert!(group.is_extinct(&Vector3::new(0, k, 0)));
        }
        assert!(!group.is_extinct(&Vector3::new(1, 0, 2)));
        assert!(!group.is_extinct(&Vector3::new(0, 2, 0)));
        assert!(!group.is_extinct(&Vector3::new(1, 1, 1)));
    }

    #[test]
    fn test_centering_extinctions() {
        let body_centered = hall("I 2 2");
        assert!(body_centered.is_extinct(&Vector3::new(1, 0, 0)));
        assert!(body_centered.is_extinct(&Vector3::new(1, 1, 1)));
        assert!(!body_centered.is_extinct(&Vector3::new(1, 1, 0)));
    }

    #[test]
    fn test_serde_record_round_trip() {
        let group = hall("-P 2ybc");
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.starts_with("{\"generators\":[\"x,y,z\""));
        assert!(json.contains("\"operations\":["));
        let back: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
        assert_eq!(back.generators(), group.generators());
        assert_eq!(back.operations(), group.operations());
    }

    #[test]
    fn test_oversized_record_is_rejected() {
        let operations: Vec<String> = (0..=MAX_GROUP_ORDER)
            .map(|i| format!("x+{}/24,y,z", i % 24))
            .collect();
        let json = serde_json::json!({ "generators": ["x,y,z"], "operations": operations });
        assert!(serde_json::from_value::<Group>(json).is_err());
    }
}
