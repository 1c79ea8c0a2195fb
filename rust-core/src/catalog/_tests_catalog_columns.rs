#[cfg(test)]
mod _tests_catalog_columns {
    use super::super::catalog_columns::{Column, ACCESSORS, BUILD_ORDER, COLUMN_COUNT};

    fn position(column: Column) -> usize {
        BUILD_ORDER.iter().position(|c| *c == column).unwrap()
    }

    #[test]
    fn test_build_order_contains_every_column_once() {
        assert_eq!(BUILD_ORDER.len(), COLUMN_COUNT);
        for column in Column::ALL {
            assert_eq!(BUILD_ORDER.iter().filter(|c| **c == column).count(), 1);
        }
    }

    #[test]
    fn test_dependencies_come_first() {
        for column in Column::ALL {
            for dependency in column.dependencies() {
                assert!(
                    position(*dependency) < position(column),
                    "{dependency} must precede {column}"
                );
            }
        }
    }

    #[test]
    fn test_compulsory_columns_have_no_dependencies() {
        let compulsory: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| c.is_compulsory())
            .collect();
        assert_eq!(compulsory, vec![Column::NC, Column::Hm, Column::Hall]);
        assert!(compulsory.iter().all(|c| c.dependencies().is_empty()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ACCESSORS[0], Column::Number);
        assert_eq!(ACCESSORS[4], Column::Hall);
        assert!(Column::HmSimple.is_accessor());
        assert!(!Column::HmNumbered.is_accessor());
        assert!(!Column::Group.is_accessor());
    }

    #[test]
    fn test_names_match_persisted_keys() {
        let names: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "n_c", "number", "setting", "HM", "Hall", "group", "HM_short", "HM_simple",
                "HM_numbered", "standard",
            ]
        );
        assert_eq!(Column::HmShort.to_string(), "HM_short");
    }
}
