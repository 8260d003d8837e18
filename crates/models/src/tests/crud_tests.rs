use anyhow::Result;
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::db::connect;
use crate::errors::ModelError;
use crate::{department, employee};

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// The code set is fixed, so tests sharing a database must reclaim their code
/// before and after running. Employees are removed physically here since the
/// FK would otherwise block the department delete.
async fn reset_department(db: &DatabaseConnection, code: &str) -> Result<()> {
    employee::Entity::delete_many()
        .filter(employee::Column::Department.eq(code))
        .exec(db)
        .await?;
    department::Entity::delete_by_id(code).exec(db).await?;
    Ok(())
}

fn dob(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 6, 15).expect("valid date")
}

fn new_employee(code: &str) -> employee::NewEmployee {
    employee::NewEmployee {
        name: "Asha Rao".into(),
        email: format!("asha_{}@example.com", Uuid::new_v4()),
        phone_number: "9876543210".into(),
        dob: dob(1994),
        major: "Computer Science".into(),
        city: "Bengaluru".into(),
        department: code.into(),
    }
}

#[tokio::test]
async fn test_department_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    reset_department(&db, "CSE").await?;

    let name = format!("Computer Science {}", Uuid::new_v4());
    let created = department::create(
        &db,
        &department::NewDepartment {
            code: "CSE".into(),
            name: name.clone(),
            floor: 2,
            description: String::new(),
        },
    )
    .await?;
    assert_eq!(created.code, "CSE");
    assert_eq!(created.name, name);
    assert_eq!(created.description, "");

    // Round-trip read
    let found = department::find_by_code(&db, "CSE").await?.expect("created row");
    assert_eq!(found, created);
    assert!(department::list(&db).await?.iter().any(|d| d.code == "CSE"));

    // Name uniqueness probe, with and without self-exclusion
    assert!(department::exists_by_name(&db, &name, None).await?);
    assert!(!department::exists_by_name(&db, &name, Some("CSE")).await?);
    assert!(!department::exists_by_name(&db, "No Such Department", None).await?);

    // Update enforces the same field rules as create
    let err = department::update(
        &db,
        "CSE",
        &department::DepartmentUpdate { name: "  ".into(), floor: 3, description: String::new() },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = department::update(
        &db,
        "CSE",
        &department::DepartmentUpdate { name: "Sciences".into(), floor: -3, description: String::new() },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(department::find_by_code(&db, "CSE").await?.expect("row"), created);

    // Full overwrite of the mutable columns
    let updated = department::update(
        &db,
        "CSE",
        &department::DepartmentUpdate {
            name: format!("CS & Engineering {}", Uuid::new_v4()),
            floor: 5,
            description: "second building".into(),
        },
    )
    .await?;
    assert_eq!(updated.floor, 5);
    assert_eq!(updated.description, "second building");

    department::delete(&db, "CSE").await?;
    assert!(department::find_by_code(&db, "CSE").await?.is_none());

    // Deleting again reports the zero-rows condition as a distinct error
    let err = department::delete(&db, "CSE").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_update_missing_department_is_not_found() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    reset_department(&db, "ME").await?;

    let err = department::update(
        &db,
        "ME",
        &department::DepartmentUpdate {
            name: format!("Mechanical {}", Uuid::new_v4()),
            floor: 1,
            description: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_employee_crud_and_soft_delete() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    reset_department(&db, "IT").await?;

    department::create(
        &db,
        &department::NewDepartment {
            code: "IT".into(),
            name: format!("Information Technology {}", Uuid::new_v4()),
            floor: 1,
            description: String::new(),
        },
    )
    .await?;

    let input = new_employee("IT");
    let created = employee::create(&db, &input).await?;
    assert!(created.id > 0);
    assert_eq!(created.email, input.email);
    assert!(created.deleted_at.is_none());

    let found = employee::find_by_id(&db, created.id).await?.expect("active row");
    assert_eq!(found, created);

    // Email uniqueness, with and without self-exclusion
    assert!(employee::exists_by_email(&db, &input.email, None).await?);
    assert!(!employee::exists_by_email(&db, &input.email, Some(created.id)).await?);

    // Partial update leaves unpatched fields alone
    let updated = employee::update(
        &db,
        created.id,
        &employee::EmployeeUpdate { city: Some("Mysuru".into()), ..Default::default() },
    )
    .await?;
    assert_eq!(updated.city, "Mysuru");
    assert_eq!(updated.email, input.email);
    assert_eq!(updated.name, input.name);

    let err = employee::update(&db, created.id, &employee::EmployeeUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));

    // A patched email gets the same format check as create
    let err = employee::update(
        &db,
        created.id,
        &employee::EmployeeUpdate { email: Some("not-an-email".into()), ..Default::default() },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    let err = employee::update(
        &db,
        created.id,
        &employee::EmployeeUpdate { name: Some("  ".into()), ..Default::default() },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert_eq!(employee::find_by_id(&db, created.id).await?.expect("row"), updated);

    assert_eq!(employee::count_by_department(&db, "IT").await?, 1);

    // Soft delete hides the row from every active-scoped query
    employee::soft_delete(&db, created.id).await?;
    assert!(employee::find_by_id(&db, created.id).await?.is_none());
    assert!(!employee::exists_by_email(&db, &input.email, None).await?);
    // The FK reference survives a soft delete, so the count still sees it
    assert_eq!(employee::count_by_department(&db, "IT").await?, 1);

    // The row itself still exists, with the marker set
    let raw = employee::Entity::find_by_id(created.id).one(&db).await?.expect("row kept");
    assert!(raw.deleted_at.is_some());

    // Deleted is terminal
    let err = employee::soft_delete(&db, created.id).await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    let err = employee::update(
        &db,
        created.id,
        &employee::EmployeeUpdate { city: Some("Pune".into()), ..Default::default() },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));

    reset_department(&db, "IT").await?;
    Ok(())
}

#[tokio::test]
async fn test_employee_filtering() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = setup_test_db().await?;
    reset_department(&db, "ECE").await?;

    department::create(
        &db,
        &department::NewDepartment {
            code: "ECE".into(),
            name: format!("Electronics {}", Uuid::new_v4()),
            floor: 3,
            description: String::new(),
        },
    )
    .await?;

    let marker = Uuid::new_v4().simple().to_string();
    let mut first = new_employee("ECE");
    first.name = format!("Ravi {}", marker);
    let first = employee::create(&db, &first).await?;
    let mut second = new_employee("ECE");
    second.name = "Meera Iyer".into();
    let second = employee::create(&db, &second).await?;

    // Substring match on name
    let by_name = employee::find(
        &db,
        &employee::EmployeeFilter { name: Some(marker.clone()), ..Default::default() },
    )
    .await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, first.id);

    // Exact match on department, both rows back
    let by_dept = employee::find(
        &db,
        &employee::EmployeeFilter { department: Some("ECE".into()), ..Default::default() },
    )
    .await?;
    assert!(by_dept.iter().any(|e| e.id == first.id));
    assert!(by_dept.iter().any(|e| e.id == second.id));

    // Conditions are ANDed
    let combined = employee::find(
        &db,
        &employee::EmployeeFilter {
            id: Some(second.id),
            name: Some("Meera".into()),
            department: Some("ECE".into()),
        },
    )
    .await?;
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].id, second.id);

    // Soft-deleted rows drop out of unfiltered listings
    employee::soft_delete(&db, first.id).await?;
    let remaining = employee::find(
        &db,
        &employee::EmployeeFilter { department: Some("ECE".into()), ..Default::default() },
    )
    .await?;
    assert!(remaining.iter().all(|e| e.id != first.id));

    reset_department(&db, "ECE").await?;
    Ok(())
}
