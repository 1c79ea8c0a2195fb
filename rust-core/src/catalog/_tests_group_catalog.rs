#[cfg(test)]
mod _tests_group_catalog {
    use super::super::bundled_catalogs::{
        point_groups, regenerate_point_groups, regenerate_space_groups, space_groups,
    };
    use super::super::catalog_builder::{build_catalog, simplify_hm};
    use super::super::catalog_columns::Column;
    use super::super::group_catalog::{CatalogKind, Query};
    use crate::errors::CatalogError;
    use crate::symmetries::{CrystalSystem, Group, Operation};
    use nalgebra::Vector3;

    // ======================== BUNDLED CONTENT ========================

    #[test]
    fn test_bundled_sizes() {
        assert_eq!(point_groups().len(), 45);
        assert_eq!(space_groups().len(), 300);
        assert_eq!(point_groups().kind(), CatalogKind::PointGroupCatalog);
        assert_eq!(space_groups().kind(), CatalogKind::SpaceGroupCatalog);

        let numbers: std::collections::HashSet<u32> =
            space_groups().iter().map(|row| row.number).collect();
        assert_eq!(numbers.len(), 230);
        assert!(numbers.iter().all(|n| (1..=230).contains(n)));
    }

    #[test]
    fn test_reference_orders() {
        let pg = point_groups();
        let sg = space_groups();
        assert_eq!(pg["m-3m"].group.order(), 48);
        assert_eq!(pg["-1"].group.order(), 2);
        assert_eq!(sg["P1"].group.order(), 1);
        assert_eq!(sg["P-1"].group.order(), 2);
        assert_eq!(sg["Ia-3d"].group.order(), 96);
        assert_eq!(sg["Fd-3m"].group.order(), 192);
    }

    #[test]
    fn test_lookup_by_number_filter() {
        let lookup = space_groups()
            .get(&Query::new().with(Column::Number, 62))
            .unwrap();
        assert_eq!(lookup.hm_short, "Pnma");
        assert!(lookup.ambiguity.is_none());
        assert_eq!(lookup.group.system(), CrystalSystem::Orthorhombic);
    }

    #[test]
    fn test_every_row_has_one_standard_per_number() {
        for catalog in [point_groups(), space_groups()] {
            let mut seen = std::collections::HashSet::new();
            for row in catalog {
                assert_eq!(row.standard, seen.insert(row.number), "{}", row.n_c);
                let expected_nc = if row.setting.is_empty() {
                    row.number.to_string()
                } else {
                    format!("{}:{}", row.number, row.setting)
                };
                assert_eq!(row.n_c, expected_nc);
                assert_eq!(row.hm_numbered, format!("{} (#{})", row.hm_simple, row.n_c));
            }
        }
    }

    #[test]
    fn test_bundled_operations_round_trip_through_codes() {
        for row in point_groups().iter().chain(space_groups().iter()) {
            for operation in row.group.operations() {
                assert!(operation.tl24().iter().all(|t| (0..24).contains(t)));
                let parsed = Operation::from_code(&operation.code()).unwrap();
                assert_eq!(parsed, **operation);
            }
        }
    }

    #[test]
    fn test_bundled_hall_symbols_reproduce_operations() {
        for row in point_groups().iter().chain(space_groups().iter()) {
            let rebuilt = Group::from_hall(&row.hall).unwrap();
            assert_eq!(rebuilt, row.group, "{} {}", row.n_c, row.hall);
        }
    }

    #[test]
    fn test_bundled_groups_are_closed() {
        for row in space_groups().iter().filter(|row| row.group.order() <= 48) {
            let operations: Vec<Operation> =
                row.group.operations().iter().map(|op| op.unbounded()).collect();
            let reclosed = Group::new(&operations).unwrap();
            assert_eq!(reclosed.order(), row.group.order(), "{}", row.n_c);
        }
    }

    // ======================== LOOKUP ========================

    #[test]
    fn test_ambiguous_key_reports_every_setting() {
        let lookup = point_groups().get(&Query::key("2/m")).unwrap();
        assert_eq!(lookup.n_c, "5:b");
        let ambiguity = lookup.ambiguity.clone().unwrap();
        assert_eq!(
            ambiguity.candidates,
            vec!["2/m (#5:b)", "2/m (#5:c)", "2/m (#5:a)"]
        );
        assert!(ambiguity.to_string().contains("2/m (#5:a)"));
    }

    #[test]
    fn test_key_matches_union_of_accessors() {
        // "2" is the simple symbol of the three 2-fold settings
        let candidates = point_groups().candidates(&Query::key("2"));
        let n_c: Vec<&str> = candidates.iter().map(|row| row.n_c.as_str()).collect();
        assert_eq!(n_c, vec!["3:b", "3:c", "3:a"]);
        assert_eq!(point_groups().get(&Query::key("2")).unwrap().hm, "121");

        // the integer 2 is the number of -1
        assert_eq!(point_groups().get(&Query::key(2u32)).unwrap().hm, "-1");
    }

    #[test]
    fn test_numeric_text_keys_are_symbols() {
        let pg = point_groups();
        assert_eq!(pg["4"].hm, "4");
        assert_eq!(pg["4"].n_c, "9");
        assert_eq!(pg["23"].hm, "23");
        assert_eq!(pg["23"].n_c, "28");
        assert_eq!(pg["3"].hm, "3");
        assert_eq!(pg["6"].hm, "6");
        assert_eq!(pg[4u32].hm_simple, "m");
        assert!(pg.get(&Query::key("4")).unwrap().ambiguity.is_none());
        assert!(space_groups().find("14").is_err());
    }

    #[test]
    fn test_key_forms() {
        let sg = space_groups();
        assert_eq!(sg.find("P21/c").unwrap().n_c, "14:b1");
        assert_eq!(sg.find("P12_1/c1").unwrap().n_c, "14:b1");
        assert_eq!(sg.find("P121/n1").unwrap().n_c, "14:b2");
        assert_eq!(sg.find("-p_2ybc").unwrap().n_c, "14:b1");
        assert_eq!(sg.find(14u32).unwrap().n_c, "14:b1");
        assert_eq!(sg[227u32].n_c, "227:1");
        assert_eq!(sg["R3:R"].hall, "P 3*");
    }

    #[test]
    fn test_filters_narrow_key_matches() {
        let sg = space_groups();
        let rhombohedral = sg
            .get(&Query::key("R-3m").with(Column::Setting, "R"))
            .unwrap();
        assert_eq!(rhombohedral.n_c, "166:R");
        assert!(rhombohedral.ambiguity.is_none());

        let second_origin = sg
            .get(&Query::key("Fd-3m").with(Column::Standard, false))
            .unwrap();
        assert_eq!(second_origin.n_c, "227:2");

        let none = sg.get(&Query::key("P21/c").with(Column::Number, 15));
        assert!(none.is_none());
    }

    #[test]
    fn test_standard_settings_sort_first() {
        let candidates = space_groups().candidates(&Query::key("P21/a"));
        let n_c: Vec<&str> = candidates.iter().map(|row| row.n_c.as_str()).collect();
        assert_eq!(n_c, vec!["14:b3", "14:c1"]);
        let r3 = space_groups().candidates(&Query::key("R3"));
        assert_eq!(r3[0].n_c, "146:H");
        assert!(r3[0].standard);
    }

    #[test]
    fn test_strict_lookup_fails_on_empty_result() {
        match space_groups().find("Xyz") {
            Err(CatalogError::NotFound { query }) => assert!(query.contains("Xyz")),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(space_groups().find(231u32).is_err());
        assert!(point_groups().get(&Query::key("P21/c")).is_none());
    }

    #[test]
    #[should_panic(expected = "no catalog entry matches")]
    fn test_bracket_access_panics_on_empty_result() {
        let _ = &point_groups()["P21/c"];
    }

    #[test]
    fn test_extinctions_from_catalog() {
        let group = &space_groups()["P21/c"].group;
        assert!(group.is_extinct(&Vector3::new(1, 0, 1)));
        assert!(group.is_extinct(&Vector3::new(0, 3, 0)));
        assert!(!group.is_extinct(&Vector3::new(1, 0, 2)));
        assert!(!group.is_extinct(&Vector3::new(0, 2, 0)));
    }

    // ======================== REGENERATION ========================

    #[test]
    fn test_simplify_hm() {
        assert_eq!(simplify_hm("P12_1/c1", true), "P21/c");
        assert_eq!(simplify_hm("P2_111", true), "P21");
        assert_eq!(simplify_hm("Fd-3m:1", false), "Fd-3m");
        assert_eq!(simplify_hm("P6_122", false), "P6122");
        assert_eq!(simplify_hm("P321", false), "P321");
        assert_eq!(simplify_hm("P1", false), "P1");
    }

    #[test]
    fn test_regenerated_point_groups_match_bundle() {
        let regenerated = regenerate_point_groups().unwrap();
        assert_eq!(&regenerated, point_groups());
    }

    #[test]
    fn test_regenerated_space_groups_match_bundle() {
        let regenerated = regenerate_space_groups().unwrap();
        assert_eq!(regenerated.len(), space_groups().len());
        for (fresh, bundled) in regenerated.iter().zip(space_groups().iter()) {
            assert_eq!(fresh, bundled, "{}", bundled.n_c);
        }
    }

    #[test]
    fn test_regeneration_reports_bad_rows() {
        let missing = build_catalog(CatalogKind::PointGroupCatalog, &[("1", "", "P 1")]);
        assert!(matches!(
            missing,
            Err(CatalogError::MissingColumn { column: "HM", row: 0 })
        ));

        let bad_key = build_catalog(CatalogKind::PointGroupCatalog, &[("x:1", "1", "P 1")]);
        assert!(matches!(bad_key, Err(CatalogError::InvalidKey(_))));

        let bad_hall = build_catalog(CatalogKind::PointGroupCatalog, &[("1", "1", "Q 1")]);
        assert!(matches!(bad_hall, Err(CatalogError::Parse(_))));
    }
}
