//! Equipment queries

use rust_decimal::{prelude::ToPrimitive, Decimal};
use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentFields, EquipmentShort},
        filter::{DistinctColumn, EquipmentFilter},
        shipping::{BoxItem, ShippingUpdate},
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Equipment>> {
        let row = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// List `(id, name)` pairs matching the active filters, ordered by name
    pub async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<EquipmentShort>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, name FROM equipment WHERE 1=1");

        if let Some(kit_name) = filter.active_kit_name() {
            builder.push(" AND kit_name = ").push_bind(kit_name);
        }
        if let Some(equipment_type) = filter.active_type() {
            builder.push(" AND type = ").push_bind(equipment_type);
        }
        if let Some(owner) = filter.active_owner() {
            builder.push(" AND owner = ").push_bind(owner);
        }
        if let Some(not_purchased) = filter.purchased.not_purchased() {
            builder.push(" AND not_purchased = ").push_bind(not_purchased);
        }

        builder.push(" ORDER BY name ASC, id ASC");

        let rows = builder
            .build_query_as::<EquipmentShort>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert equipment, returning its new id
    pub async fn create(&self, data: &EquipmentFields) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipment (
                name, type, brand, model, model_number, description, serial_number,
                kit_name, owner, status, not_purchased, purchase_company,
                date_of_purchase, cost, website_url, date_insured, weight
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.equipment_type)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.model_number)
        .bind(&data.description)
        .bind(&data.serial_number)
        .bind(&data.kit_name)
        .bind(&data.owner)
        .bind(data.status)
        .bind(data.not_purchased)
        .bind(&data.purchase_company)
        .bind(data.date_of_purchase)
        .bind(to_real(data.cost, "cost")?)
        .bind(&data.website_url)
        .bind(data.date_insured)
        .bind(to_real(data.weight, "weight")?)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite every non-shipping column of one row
    pub async fn update(&self, id: i64, data: &EquipmentFields) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE equipment SET
                name = ?, type = ?, brand = ?, model = ?, model_number = ?,
                description = ?, serial_number = ?, kit_name = ?, owner = ?,
                status = ?, not_purchased = ?, purchase_company = ?,
                date_of_purchase = ?, cost = ?, website_url = ?, date_insured = ?,
                weight = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.name)
        .bind(&data.equipment_type)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.model_number)
        .bind(&data.description)
        .bind(&data.serial_number)
        .bind(&data.kit_name)
        .bind(&data.owner)
        .bind(data.status)
        .bind(data.not_purchased)
        .bind(&data.purchase_company)
        .bind(data.date_of_purchase)
        .bind(to_real(data.cost, "cost")?)
        .bind(&data.website_url)
        .bind(data.date_insured)
        .bind(to_real(data.weight, "weight")?)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete equipment. A missing id affects no rows.
    pub async fn delete(&self, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Set only the supplied shipping columns of one row
    pub async fn update_shipping(&self, id: i64, data: &ShippingUpdate) -> AppResult<u64> {
        let assignments = data.assignments();
        if assignments.is_empty() {
            return Err(AppError::Validation("No shipping fields supplied".to_string()));
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE equipment SET ");
        let mut sets = builder.separated(", ");
        for (field, value) in assignments {
            sets.push(field.column());
            sets.push_unseparated(" = ");
            sets.push_bind_unseparated(value);
        }
        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Non-null distinct values of an allow-listed column
    pub async fn distinct_values(&self, column: DistinctColumn) -> AppResult<Vec<String>> {
        let column = column.column();
        let query = format!(
            r#"SELECT DISTINCT "{0}" FROM equipment WHERE "{0}" IS NOT NULL ORDER BY "{0}""#,
            column
        );
        let values = sqlx::query_scalar::<_, String>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(values)
    }

    /// Box numbers currently in use
    pub async fn boxes(&self) -> AppResult<Vec<String>> {
        let boxes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT box_number FROM equipment
            WHERE box_number IS NOT NULL AND box_number <> ''
            ORDER BY box_number
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(boxes)
    }

    /// Name, weight and kit of every item packed in a box
    pub async fn items_in_box(&self, box_number: &str) -> AppResult<Vec<BoxItem>> {
        let items = sqlx::query_as::<_, BoxItem>(
            "SELECT name, weight, kit_name FROM equipment WHERE box_number = ? ORDER BY name, id",
        )
        .bind(box_number)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Rename every row named `old_name`
    pub async fn rename_by_name(&self, old_name: &str, new_name: &str) -> AppResult<u64> {
        let result = sqlx::query("UPDATE equipment SET name = ? WHERE name = ?")
            .bind(new_name)
            .bind(old_name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

fn to_real(value: Decimal, label: &str) -> AppResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| AppError::Validation(format!("{} is out of range: {}", label, value)))
}
