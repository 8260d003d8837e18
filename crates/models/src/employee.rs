use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter, Select};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub dob: NaiveDate,
    pub major: String,
    pub city: String,
    pub department: String,
    pub deleted_at: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Department,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Department => Entity::belongs_to(crate::department::Entity)
                .from(Column::Department)
                .to(crate::department::Column::Code)
                .into(),
        }
    }
}

impl Related<crate::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create request body; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub dob: NaiveDate,
    pub major: String,
    pub city: String,
    pub department: String,
}

/// Partial update body; only provided fields overwrite existing columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub dob: Option<NaiveDate>,
    pub major: Option<String>,
    pub city: Option<String>,
    pub department: Option<String>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.dob.is_none()
            && self.major.is_none()
            && self.city.is_none()
            && self.department.is_none()
    }
}

/// Optional list predicates, ANDed when present; `name` is a substring match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFilter {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub department: Option<String>,
}

fn active() -> Select<Entity> {
    Entity::find().filter(Column::DeletedAt.is_null())
}

pub async fn create(db: &DatabaseConnection, emp: &NewEmployee) -> Result<Model, ModelError> {
    if emp.name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if !emp.email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    let am = ActiveModel {
        name: Set(emp.name.clone()),
        email: Set(emp.email.clone()),
        phone_number: Set(emp.phone_number.clone()),
        dob: Set(emp.dob),
        major: Set(emp.major.clone()),
        city: Set(emp.city.clone()),
        department: Set(emp.department.clone()),
        deleted_at: Set(None),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// List active employees, one condition appended per present filter field.
pub async fn find(db: &DatabaseConnection, filter: &EmployeeFilter) -> Result<Vec<Model>, ModelError> {
    let mut query = active();
    if let Some(id) = filter.id {
        query = query.filter(Column::Id.eq(id));
    }
    if let Some(ref name) = filter.name {
        query = query.filter(Column::Name.contains(name));
    }
    if let Some(ref department) = filter.department {
        query = query.filter(Column::Department.eq(department));
    }
    query.all(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    active()
        .filter(Column::Id.eq(id))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    patch: &EmployeeUpdate,
) -> Result<Model, ModelError> {
    if patch.is_empty() {
        return Err(ModelError::Validation("no fields to update".into()));
    }
    if let Some(ref name) = patch.name {
        if name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
    }
    if let Some(ref email) = patch.email {
        if !email.contains('@') {
            return Err(ModelError::Validation("invalid email".into()));
        }
    }

    let mut am: ActiveModel = find_by_id(db, id)
        .await?
        .ok_or_else(|| ModelError::NotFound("employee not found".into()))?
        .into();

    if let Some(ref name) = patch.name {
        am.name = Set(name.clone());
    }
    if let Some(ref email) = patch.email {
        am.email = Set(email.clone());
    }
    if let Some(ref phone_number) = patch.phone_number {
        am.phone_number = Set(phone_number.clone());
    }
    if let Some(dob) = patch.dob {
        am.dob = Set(dob);
    }
    if let Some(ref major) = patch.major {
        am.major = Set(major.clone());
    }
    if let Some(ref city) = patch.city {
        am.city = Set(city.clone());
    }
    if let Some(ref department) = patch.department {
        am.department = Set(department.clone());
    }

    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Mark the row deleted. A second call finds no active row and fails, which
/// makes the deleted state terminal.
pub async fn soft_delete(db: &DatabaseConnection, id: i32) -> Result<(), ModelError> {
    let mut am: ActiveModel = find_by_id(db, id)
        .await?
        .ok_or_else(|| ModelError::NotFound("employee not found".into()))?
        .into();
    am.deleted_at = Set(Some(Utc::now().date_naive()));
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(())
}

/// Uniqueness probe for `email` among active employees; the exclusion clause
/// is appended only when an exclude id is supplied.
pub async fn exists_by_email(
    db: &DatabaseConnection,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<bool, ModelError> {
    let mut query = active().filter(Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(Column::Id.ne(id));
    }
    let count = query
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(count > 0)
}

/// Number of employee rows mapped to a department code. Soft-deleted rows
/// count too: they still hold an FK reference to the department.
pub async fn count_by_department(db: &DatabaseConnection, code: &str) -> Result<u64, ModelError> {
    Entity::find()
        .filter(Column::Department.eq(code))
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
