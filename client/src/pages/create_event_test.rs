use super::*;

#[test]
fn validate_event_draft_trims_fields() {
    let draft = validate_event_draft(
        "  Beach Cleanup ",
        " Bring gloves. ",
        " Pier 14 ",
        "2026-09-12T09:00",
        "",
    )
    .unwrap();
    assert_eq!(draft.title, "Beach Cleanup");
    assert_eq!(draft.description, "Bring gloves.");
    assert_eq!(draft.location, "Pier 14");
    assert!(draft.image_url.is_empty());
}

#[test]
fn validate_event_draft_requires_title_location_date() {
    for (title, location, date) in
        [("", "Pier", "2026-09-12T09:00"), ("Cleanup", " ", "2026-09-12T09:00"), ("Cleanup", "Pier", "")]
    {
        assert_eq!(
            validate_event_draft(title, "", location, date, "").err(),
            Some("Title, location, and date are required.")
        );
    }
}
