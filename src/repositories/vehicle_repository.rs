use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

// Fila de la tabla vehicles
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    #[allow(dead_code)]
    customer_id: Uuid,
    make: String,
    model: String,
    year: i32,
    license: String,
    vin: String,
    car_id: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl VehicleRow {
    fn into_vehicle(self) -> Vehicle {
        Vehicle {
            id: self.id.to_string(),
            make: self.make,
            model: self.model,
            year: self.year,
            license: self.license,
            vin: self.vin,
            car_id: self.car_id,
        }
    }
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Añade un vehículo a un cliente; el id local se sustituye por el definitivo
    pub async fn create(&self, customer_id: Uuid, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO vehicles (id, customer_id, make, model, year, license, vin, car_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(customer_id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license)
        .bind(&vehicle.vin)
        .bind(&vehicle.car_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_vehicle())
    }

    pub async fn find_by_id(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<Option<Vehicle>, AppError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles WHERE id = $1 AND customer_id = $2",
        )
        .bind(vehicle_id)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(VehicleRow::into_vehicle))
    }

    pub async fn find_by_customer(&self, customer_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles WHERE customer_id = $1 ORDER BY created_at ASC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VehicleRow::into_vehicle).collect())
    }

    pub async fn update(
        &self,
        customer_id: Uuid,
        vehicle_id: Uuid,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        license: Option<String>,
        vin: Option<String>,
        car_id: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(customer_id, vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE vehicles
            SET make = $3, model = $4, year = $5, license = $6, vin = $7, car_id = $8
            WHERE id = $1 AND customer_id = $2
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(customer_id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(license.unwrap_or(current.license))
        .bind(vin.unwrap_or(current.vin))
        .bind(car_id.unwrap_or(current.car_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_vehicle())
    }

    pub async fn delete(&self, customer_id: Uuid, vehicle_id: Uuid) -> Result<(), AppError> {
        self.find_by_id(customer_id, vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        sqlx::query("DELETE FROM vehicles WHERE id = $1 AND customer_id = $2")
            .bind(vehicle_id)
            .bind(customer_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
