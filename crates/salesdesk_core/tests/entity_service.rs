use chrono::NaiveDate;
use salesdesk_core::{
    DaoError, DaoFactory, Department, DepartmentService, EntityKind, Seller, SellerService,
    ServiceError, Store,
};

#[test]
fn save_or_update_inserts_transient_entity_and_assigns_id() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = DepartmentService::new(factory.department_dao().unwrap());

    let mut books = Department::new("Books");
    service.save_or_update(&mut books).unwrap();

    let id = books.id.expect("identity assigned on insert");
    assert_eq!(id, 1);
    assert_eq!(service.find_by_id(id).unwrap(), Some(books.clone()));
    assert_eq!(service.find_all().unwrap(), vec![books]);
}

#[test]
fn save_or_update_updates_persisted_entity_and_keeps_id() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = SellerService::new(factory.seller_dao().unwrap());

    let mut seller = Seller::new("Bob", "bob@example.com");
    seller.birth_date = NaiveDate::from_ymd_opt(1985, 1, 2);
    service.save_or_update(&mut seller).unwrap();
    let id = seller.id.unwrap();

    seller.email = "bob.brown@example.com".to_string();
    seller.base_salary = 2500.0;
    service.save_or_update(&mut seller).unwrap();

    assert_eq!(seller.id, Some(id));
    let loaded = service.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded.email, "bob.brown@example.com");
    assert_eq!(loaded.base_salary, 2500.0);
    assert_eq!(loaded.name, "Bob");
    assert_eq!(service.find_all().unwrap().len(), 1);
}

#[test]
fn save_or_update_with_stale_id_surfaces_not_found() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = DepartmentService::new(factory.department_dao().unwrap());

    let mut ghost = Department::with_id(41, "Ghost");
    let err = service.save_or_update(&mut ghost).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(ghost.id, Some(41));
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn remove_none_is_an_illegal_state() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = DepartmentService::new(factory.department_dao().unwrap());

    let err = service.remove(None).unwrap_err();
    assert!(matches!(err, ServiceError::IllegalState(_)));
}

#[test]
fn remove_transient_entity_reports_not_persisted() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = DepartmentService::new(factory.department_dao().unwrap());

    let err = service.remove(Some(&Department::new("Draft"))).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotPersisted(EntityKind::Department)
    ));
}

#[test]
fn remove_deletes_persisted_entity() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let service = DepartmentService::new(factory.department_dao().unwrap());

    let mut books = Department::new("Books");
    service.save_or_update(&mut books).unwrap();
    service.remove(Some(&books)).unwrap();

    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn remove_referenced_department_surfaces_integrity_error_and_keeps_row() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);
    let departments = DepartmentService::new(factory.department_dao().unwrap());
    let sellers = SellerService::new(factory.seller_dao().unwrap());

    let mut books = Department::new("Books");
    departments.save_or_update(&mut books).unwrap();
    let mut bob = Seller::new("Bob", "bob@example.com");
    bob.department = Some(books.clone());
    sellers.save_or_update(&mut bob).unwrap();

    let err = departments.remove(Some(&books)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Dao(DaoError::Integrity {
            kind: EntityKind::Department,
            ..
        })
    ));
    assert!(departments.find_all().unwrap().contains(&books));

    sellers.remove(Some(&bob)).unwrap();
    departments.remove(Some(&books)).unwrap();
    assert!(departments.find_all().unwrap().is_empty());
}

#[test]
fn services_built_from_one_factory_share_the_store() {
    let store = Store::in_memory();
    let factory = DaoFactory::new(&store);

    let writer = DepartmentService::new(factory.department_dao().unwrap());
    let reader = DepartmentService::new(factory.department_dao().unwrap());

    let mut books = Department::new("Books");
    writer.save_or_update(&mut books).unwrap();
    assert_eq!(reader.find_all().unwrap(), vec![books]);
}
