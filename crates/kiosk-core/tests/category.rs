use kiosk_core::error::UnknownCategory;
use kiosk_core::models::category::Category;

#[test]
fn every_category_parses_from_its_name() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>(), Ok(category));
    }
}

#[test]
fn unknown_category_lists_known_names() {
    let err = "cardio".parse::<Category>().unwrap_err();
    assert_eq!(err, UnknownCategory("cardio".to_string()));
    assert!(err.to_string().contains("body_composition"));
}
