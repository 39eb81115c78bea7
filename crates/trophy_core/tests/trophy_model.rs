use trophy_core::{Trophy, TrophyValidationError};

#[test]
fn new_reads_back_supplied_fields() {
    let trophy = Trophy::new(6, "Copa del Rey", 2023).unwrap();

    assert_eq!(trophy.id(), 6);
    assert_eq!(trophy.competition(), "Copa del Rey");
    assert_eq!(trophy.year(), 2023);
}

#[test]
fn new_accepts_year_bounds() {
    assert_eq!(Trophy::new(1, "Copa del Rey", 1970).unwrap().year(), 1970);
    assert_eq!(Trophy::new(1, "Copa del Rey", 2025).unwrap().year(), 2025);
}

#[test]
fn new_rejects_out_of_range_years() {
    for year in [i32::MIN, 0, 1969, 2026, i32::MAX] {
        let err = Trophy::new(6, "Copa del Rey", year).unwrap_err();
        assert_eq!(err, TrophyValidationError::InvalidYear(year));
    }
}

#[test]
fn new_rejects_blank_or_short_competitions() {
    for competition in ["", "   ", "\t\n", "AB", "  AB  ", "x"] {
        let err = Trophy::new(6, competition, 2023).unwrap_err();
        assert!(
            matches!(err, TrophyValidationError::InvalidCompetition(_)),
            "`{competition}` should be rejected, got {err:?}"
        );
    }
}

#[test]
fn new_keeps_surrounding_whitespace() {
    let trophy = Trophy::new(1, "  FA Cup  ", 2020).unwrap();
    assert_eq!(trophy.competition(), "  FA Cup  ");
}

#[test]
fn id_is_stored_without_range_checks() {
    assert_eq!(Trophy::new(-5, "Copa del Rey", 2023).unwrap().id(), -5);
    assert_eq!(Trophy::new(0, "Copa del Rey", 2023).unwrap().id(), 0);
}

#[test]
fn setters_validate_and_leave_field_unchanged_on_error() {
    let mut trophy = Trophy::new(1, "Champions League", 2020).unwrap();

    let err = trophy.set_competition(" ").unwrap_err();
    assert!(matches!(err, TrophyValidationError::InvalidCompetition(_)));
    assert_eq!(trophy.competition(), "Champions League");

    let err = trophy.set_year(2030).unwrap_err();
    assert_eq!(err, TrophyValidationError::InvalidYear(2030));
    assert_eq!(trophy.year(), 2020);

    trophy.set_competition("Europa League").unwrap();
    trophy.set_year(1999).unwrap();
    assert_eq!(trophy.competition(), "Europa League");
    assert_eq!(trophy.year(), 1999);
}

#[test]
fn display_uses_fixed_format() {
    let trophy = Trophy::new(3, "Premier League", 2022).unwrap();
    assert_eq!(
        trophy.to_string(),
        "id: 3, Competition: Premier League, Year: 2022"
    );
}

#[test]
fn validation_errors_render_readable_messages() {
    let err = Trophy::new(1, "", 2020).unwrap_err();
    assert!(err.to_string().contains("cannot be empty"), "{err}");

    let err = Trophy::new(1, "AB", 2020).unwrap_err();
    assert!(err.to_string().contains("at least 3 characters"), "{err}");

    let err = Trophy::new(1, "Serie A", 1969).unwrap_err();
    assert!(err.to_string().contains("1969"), "{err}");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let trophy = Trophy::new(4, "Serie A", 2023).unwrap();

    let json = serde_json::to_value(&trophy).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["competition"], "Serie A");
    assert_eq!(json["year"], 2023);

    let decoded: Trophy = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, trophy);
}

#[test]
fn deserialize_rejects_invalid_fields() {
    let value = serde_json::json!({
        "id": 1,
        "competition": "Serie A",
        "year": 2026
    });
    let err = serde_json::from_value::<Trophy>(value).unwrap_err();
    assert!(
        err.to_string().contains("2026 is outside 1970..=2025"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!({
        "id": 1,
        "competition": "  ",
        "year": 2020
    });
    let err = serde_json::from_value::<Trophy>(value).unwrap_err();
    assert!(
        err.to_string().contains("invalid competition"),
        "unexpected error: {err}"
    );
}
