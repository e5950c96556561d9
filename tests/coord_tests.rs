use battle_dinghy::{CoordError, Coordinate};

#[test]
fn test_parse_valid_corners() {
    for (text, row, col) in [("A1", 0, 0), ("A6", 0, 5), ("F1", 5, 0), ("F6", 5, 5)] {
        let coord: Coordinate = text.parse().unwrap();
        assert_eq!((coord.row(), coord.col()), (row, col), "coordinate {}", text);
    }
}

#[test]
fn test_parse_lowercase_and_digit_first() {
    let coord: Coordinate = "c3".parse().unwrap();
    assert_eq!((coord.row(), coord.col()), (2, 2));

    let swapped: Coordinate = "3c".parse().unwrap();
    assert_eq!(swapped, coord);

    let padded: Coordinate = "  B5 ".parse().unwrap();
    assert_eq!((padded.row(), padded.col()), (1, 4));
}

#[test]
fn test_parse_range_errors() {
    assert_eq!(
        "G1".parse::<Coordinate>().unwrap_err(),
        CoordError::RowOutOfRange('G')
    );
    assert_eq!(
        "A7".parse::<Coordinate>().unwrap_err(),
        CoordError::ColOutOfRange('7')
    );
    assert_eq!(
        "A0".parse::<Coordinate>().unwrap_err(),
        CoordError::ColOutOfRange('0')
    );
}

#[test]
fn test_parse_malformed() {
    for text in ["", "A", "AB", "12", "A12", "fire"] {
        assert_eq!(
            text.parse::<Coordinate>().unwrap_err(),
            CoordError::Malformed,
            "input {:?}",
            text
        );
    }
}

#[test]
fn test_display_roundtrip() {
    let coord: Coordinate = "d4".parse().unwrap();
    assert_eq!(coord.to_string(), "D4");
    assert_eq!(coord.to_string().parse::<Coordinate>().unwrap(), coord);
}

#[test]
fn test_range_error_messages() {
    assert_eq!(
        CoordError::RowOutOfRange('G').to_string(),
        "row must be A-F, got 'G'"
    );
    assert_eq!(
        CoordError::ColOutOfRange('7').to_string(),
        "column must be 1-6, got '7'"
    );
}

#[test]
fn test_find_in_text_after_keyword() {
    let coord = Coordinate::find_in_text("@battle_dinghy fire B3!").unwrap();
    assert_eq!(coord.to_string(), "B3");

    let coord = Coordinate::find_in_text("I'll shoot d4, watch this").unwrap();
    assert_eq!(coord.to_string(), "D4");
}

#[test]
fn test_find_in_text_standalone_fallback() {
    let coord = Coordinate::find_in_text("how about E2?").unwrap();
    assert_eq!(coord.to_string(), "E2");
}

#[test]
fn test_find_in_text_none() {
    assert_eq!(Coordinate::find_in_text("let's battle, you and me"), None);
    assert_eq!(Coordinate::find_in_text(""), None);
}
