#[cfg(test)]
mod _tests_catalog_serialization {
    use super::super::bundled_catalogs::{point_groups, space_groups};
    use super::super::group_catalog::{CatalogKind, GroupCatalog};
    use crate::errors::CatalogError;

    #[test]
    fn test_round_trip_reproduces_table() {
        for catalog in [point_groups(), space_groups()] {
            let json = catalog.to_json().unwrap();
            let back = GroupCatalog::from_json(catalog.kind(), &json).unwrap();
            assert_eq!(&back, catalog);
            for (a, b) in back.iter().zip(catalog.iter()) {
                assert_eq!(a.group.operations(), b.group.operations());
                assert_eq!(a.group.generators(), b.group.generators());
            }
        }
    }

    #[test]
    fn test_compact_round_trip() {
        let json = point_groups().to_json_compact().unwrap();
        assert!(json.starts_with("{\"_type\":\"PointGroupCatalog\",\"table\":["));
        let back = GroupCatalog::from_json(CatalogKind::PointGroupCatalog, &json).unwrap();
        assert_eq!(&back, point_groups());
    }

    #[test]
    fn test_layout_has_one_row_per_line() {
        let json = point_groups().to_json().unwrap();
        let lines: Vec<&str> = json.lines().collect();
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "  \"_type\": \"PointGroupCatalog\",");
        assert_eq!(lines.len(), 45 + 5);
        assert!(lines[3].starts_with("    {\"n_c\":\"1\",\"number\":1,\"setting\":\"\",\"HM\":\"1\""));
    }

    #[test]
    fn test_wrong_kind_is_rejected() {
        let json = point_groups().to_json().unwrap();
        match GroupCatalog::from_json(CatalogKind::SpaceGroupCatalog, &json) {
            Err(CatalogError::WrongKind { expected, found }) => {
                assert_eq!(expected, "SpaceGroupCatalog");
                assert_eq!(found, "PointGroupCatalog");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let truncated = r#"{"_type": "PointGroupCatalog", "table": [{"n_c": "1"}]}"#;
        assert!(matches!(
            GroupCatalog::from_json(CatalogKind::PointGroupCatalog, truncated),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            GroupCatalog::from_json(CatalogKind::PointGroupCatalog, "not json"),
            Err(CatalogError::Json(_))
        ));

        let bad_code = r#"{"_type": "PointGroupCatalog", "table": [{"n_c": "1", "number": 1,
            "setting": "", "HM": "1", "Hall": "P 1",
            "group": {"generators": ["x,y,w"], "operations": ["x,y,z"]},
            "HM_short": "1", "HM_simple": "1", "HM_numbered": "1 (#1)", "standard": true}]}"#;
        assert!(GroupCatalog::from_json(CatalogKind::PointGroupCatalog, bad_code).is_err());
    }

    #[test]
    fn test_loading_trusts_stored_operations() {
        // rows are taken as stored; the Hall symbol is not consulted
        let json = r#"{"_type": "PointGroupCatalog", "table": [{"n_c": "1", "number": 1,
            "setting": "", "HM": "1", "Hall": "not a hall symbol",
            "group": {"generators": ["x,y,z"], "operations": ["x,y,z"]},
            "HM_short": "1", "HM_simple": "1", "HM_numbered": "1 (#1)", "standard": true}]}"#;
        let catalog = GroupCatalog::from_json(CatalogKind::PointGroupCatalog, json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rows()[0].group.order(), 1);
    }
}
