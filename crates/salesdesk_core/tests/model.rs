use chrono::NaiveDate;
use salesdesk_core::{Department, Entity, EntityKind, Seller};

#[test]
fn new_entities_are_transient_until_id_is_set() {
    let mut department = Department::new("Books");
    assert!(department.is_transient());

    department.set_id(9);
    assert!(!department.is_transient());
    assert_eq!(department.id(), Some(9));
    assert_eq!(Department::KIND, EntityKind::Department);
    assert_eq!(Seller::KIND.as_str(), "seller");
}

#[test]
fn seller_display_helpers_match_form_formats() {
    let mut seller = Seller::new("Bob", "bob@example.com");
    assert_eq!(seller.birth_date_display(), "");
    assert_eq!(seller.base_salary_display(), "0.00");

    seller.birth_date = NaiveDate::from_ymd_opt(2001, 2, 3);
    seller.base_salary = 1999.999;
    assert_eq!(seller.birth_date_display(), "03/02/2001");
    assert_eq!(seller.base_salary_display(), "2000.00");
}

#[test]
fn seller_serialization_uses_expected_wire_fields() {
    let seller = Seller {
        id: Some(4),
        name: "Anna".to_string(),
        email: "anna@example.com".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1979, 11, 3),
        base_salary: 2500.0,
        department: Some(Department::with_id(2, "Computers")),
    };

    let json = serde_json::to_value(&seller).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["birth_date"], "1979-11-03");
    assert_eq!(json["department"]["name"], "Computers");

    let decoded: Seller = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, seller);
}
