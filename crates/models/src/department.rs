use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Closed set of valid department codes, checked independently of what rows
/// exist in the table.
pub const ALLOWED_CODES: [&str; 5] = ["CSE", "IT", "ECE", "EEE", "ME"];

pub fn is_valid_code(code: &str) -> bool {
    ALLOWED_CODES.contains(&code)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    pub floor: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::has_many(crate::employee::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Create request body; `code` is immutable after this point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDepartment {
    pub code: String,
    pub name: String,
    pub floor: i32,
    #[serde(default)]
    pub description: String,
}

/// Update request body; all three mutable columns are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: String,
    pub floor: i32,
    #[serde(default)]
    pub description: String,
}

pub async fn create(db: &DatabaseConnection, dep: &NewDepartment) -> Result<Model, ModelError> {
    if dep.name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if dep.floor <= 0 {
        return Err(ModelError::Validation("floor must be positive".into()));
    }
    let am = ActiveModel {
        code: Set(dep.code.clone()),
        name: Set(dep.name.clone()),
        floor: Set(dep.floor),
        description: Set(dep.description.clone()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn find_by_code(db: &DatabaseConnection, code: &str) -> Result<Option<Model>, ModelError> {
    Entity::find_by_id(code)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn update(
    db: &DatabaseConnection,
    code: &str,
    patch: &DepartmentUpdate,
) -> Result<Model, ModelError> {
    if patch.name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if patch.floor <= 0 {
        return Err(ModelError::Validation("floor must be positive".into()));
    }
    let mut am: ActiveModel = Entity::find_by_id(code)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::NotFound("department not found".into()))?
        .into();
    am.name = Set(patch.name.clone());
    am.floor = Set(patch.floor);
    am.description = Set(patch.description.clone());
    am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn delete(db: &DatabaseConnection, code: &str) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(code)
        .exec(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound("department not found".into()));
    }
    Ok(())
}

/// Uniqueness probe for `name`; the exclusion clause is appended only when an
/// exclude code is supplied.
pub async fn exists_by_name(
    db: &DatabaseConnection,
    name: &str,
    exclude_code: Option<&str>,
) -> Result<bool, ModelError> {
    let mut query = Entity::find().filter(Column::Name.eq(name));
    if let Some(code) = exclude_code {
        query = query.filter(Column::Code.ne(code));
    }
    let count = query
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_accepts_known_codes() {
        for code in ALLOWED_CODES {
            assert!(is_valid_code(code));
        }
    }

    #[test]
    fn allow_list_rejects_unknown_and_lowercase_codes() {
        assert!(!is_valid_code("BIO"));
        assert!(!is_valid_code("it"));
        assert!(!is_valid_code(""));
    }
}
