//! Tests for error display and conversion

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilejigsaw::PuzzleError;
    use tilejigsaw::io::error::{invalid_parameter, parse_error};

    #[test]
    fn test_display_names_the_problem() {
        let error = PuzzleError::DuplicateTile { id: 2311 };
        assert_eq!(error.to_string(), "Tile 2311 appears more than once");

        let error = PuzzleError::NonSquareTileCount { count: 5 };
        assert!(error.to_string().contains("5 tiles"));

        let error = PuzzleError::NoPatternMatch { pattern_cells: 15 };
        assert!(error.to_string().contains("15 cells"));

        let error = PuzzleError::OverlappingMatches {
            total_set: 3,
            matches: 2,
            pattern_cells: 2,
        };
        assert!(error.to_string().contains("exceed the 3 set pixels"));

        let error = PuzzleError::InconsistentTileSide {
            id: 7,
            expected: 10,
            found: 9,
        };
        assert_eq!(
            error.to_string(),
            "Tile 7 has side 9 but previous tiles have side 10"
        );
    }

    #[test]
    fn test_helpers_build_expected_variants() {
        let error = parse_error(12, &"unexpected pixel character 'x'");
        assert!(matches!(&error, PuzzleError::Parse { line: 12, .. }));
        assert!(error.to_string().starts_with("Parse error on line 12"));

        let error = invalid_parameter("density", &1.5, &"density must lie in [0, 1]");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'density' = '1.5': density must lie in [0, 1]"
        );
    }

    #[test]
    fn test_file_system_errors_keep_their_source() {
        let error = PuzzleError::FileSystem {
            path: PathBuf::from("missing.txt"),
            operation: "read puzzle",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("missing.txt"));
        assert!(error.to_string().contains("read puzzle"));

        assert!(PuzzleError::UnsolvedBoard { cell: 3 }.source().is_none());
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: PuzzleError = io.into();
        assert!(matches!(error, PuzzleError::FileSystem { .. }));
    }
}
