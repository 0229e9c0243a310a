use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::loaner_car::LoanerCar;
use crate::utils::errors::AppError;

// Fila de la tabla loaner_cars
#[derive(Debug, sqlx::FromRow)]
struct LoanerCarRow {
    id: Uuid,
    make: String,
    model: String,
    year: i32,
    license: String,
    current_mileage: Decimal,
    status: String,
    assigned_customer_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl LoanerCarRow {
    fn into_loaner_car(self) -> LoanerCar {
        LoanerCar {
            id: self.id.to_string(),
            make: self.make,
            model: self.model,
            year: self.year,
            license: self.license,
            current_mileage: self.current_mileage,
            status: self.status,
            assigned_customer_id: self.assigned_customer_id.map(|id| id.to_string()),
            created_at: self.created_at,
        }
    }
}

pub struct LoanerRepository {
    pool: PgPool,
}

impl LoanerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        make: String,
        model: String,
        year: i32,
        license: String,
        current_mileage: Decimal,
        status: &str,
    ) -> Result<LoanerCar, AppError> {
        let row = sqlx::query_as::<_, LoanerCarRow>(
            r#"
            INSERT INTO loaner_cars (id, make, model, year, license, current_mileage, status, assigned_customer_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NULL, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(license)
        .bind(current_mileage)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_loaner_car())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LoanerCar>, AppError> {
        let row = sqlx::query_as::<_, LoanerCarRow>("SELECT * FROM loaner_cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(LoanerCarRow::into_loaner_car))
    }

    pub async fn find_all(&self) -> Result<Vec<LoanerCar>, AppError> {
        let rows = sqlx::query_as::<_, LoanerCarRow>(
            "SELECT * FROM loaner_cars ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LoanerCarRow::into_loaner_car).collect())
    }

    pub async fn license_exists(&self, license: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM loaner_cars WHERE license = $1)",
        )
        .bind(license)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        license: Option<String>,
        status: Option<String>,
        current_mileage: Option<Decimal>,
    ) -> Result<LoanerCar, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        let row = sqlx::query_as::<_, LoanerCarRow>(
            r#"
            UPDATE loaner_cars
            SET make = $2, model = $3, year = $4, license = $5, status = $6, current_mileage = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(license.unwrap_or(current.license))
        .bind(status.unwrap_or(current.status))
        .bind(current_mileage.unwrap_or(current.current_mileage))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_loaner_car())
    }

    /// Cambia el estado y el cliente asignado en una sola operación
    pub async fn set_assignment(
        &self,
        id: Uuid,
        status: &str,
        customer_id: Option<Uuid>,
    ) -> Result<LoanerCar, AppError> {
        let row = sqlx::query_as::<_, LoanerCarRow>(
            r#"
            UPDATE loaner_cars
            SET status = $2, assigned_customer_id = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        Ok(row.into_loaner_car())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche de préstamo no encontrado".to_string()))?;

        sqlx::query("DELETE FROM loaner_cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
