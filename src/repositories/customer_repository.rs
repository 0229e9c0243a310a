use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::{Customer, CustomerAddress};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

// Fila de la tabla customers
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    notes: String,
    street: String,
    zip_code: String,
    city: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

// Fila de la tabla vehicles
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
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

impl CustomerRow {
    fn into_customer(self, vehicles: Vec<Vehicle>) -> Customer {
        Customer {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
            address: CustomerAddress {
                street: self.street,
                zip_code: self.zip_code,
                city: self.city,
            },
            vehicles,
        }
    }
}

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persiste un cliente nuevo con sus vehículos.
    ///
    /// Los identificadores locales del cliente y de sus vehículos se
    /// sustituyen por los definitivos asignados aquí.
    pub async fn create(&self, customer: &Customer) -> Result<Customer, AppError> {
        let mut tx = self.pool.begin().await?;

        let customer_row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (id, name, email, phone, notes, street, zip_code, city, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.notes)
        .bind(&customer.address.street)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.city)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mut vehicles = Vec::with_capacity(customer.vehicles.len());
        for vehicle in &customer.vehicles {
            let vehicle_row = sqlx::query_as::<_, VehicleRow>(
                r#"
                INSERT INTO vehicles (id, customer_id, make, model, year, license, vin, car_id, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(customer_row.id)
            .bind(&vehicle.make)
            .bind(&vehicle.model)
            .bind(vehicle.year)
            .bind(&vehicle.license)
            .bind(&vehicle.vin)
            .bind(&vehicle.car_id)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

            vehicles.push(vehicle_row.into_vehicle());
        }

        tx.commit().await?;

        Ok(customer_row.into_customer(vehicles))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let vehicles = self.find_vehicles(id).await?;
                Ok(Some(row.into_customer(vehicles)))
            }
            None => Ok(None),
        }
    }

    /// Lista completa de clientes en orden de alta, con sus vehículos
    pub async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT * FROM customers ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let vehicle_rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut vehicles_by_customer: HashMap<Uuid, Vec<Vehicle>> = HashMap::new();
        for vehicle_row in vehicle_rows {
            vehicles_by_customer
                .entry(vehicle_row.customer_id)
                .or_default()
                .push(vehicle_row.into_vehicle());
        }

        let customers = rows
            .into_iter()
            .map(|row| {
                let vehicles = vehicles_by_customer.remove(&row.id).unwrap_or_default();
                row.into_customer(vehicles)
            })
            .collect();

        Ok(customers)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1 AND email <> '')",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        notes: Option<String>,
        street: Option<String>,
        zip_code: Option<String>,
        city: Option<String>,
    ) -> Result<Customer, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = $2, email = $3, phone = $4, notes = $5, street = $6, zip_code = $7, city = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(email.unwrap_or(current.email))
        .bind(phone.unwrap_or(current.phone))
        .bind(notes.unwrap_or(current.notes))
        .bind(street.unwrap_or(current.address.street))
        .bind(zip_code.unwrap_or(current.address.zip_code))
        .bind(city.unwrap_or(current.address.city))
        .fetch_one(&self.pool)
        .await?;

        let vehicles = self.find_vehicles(id).await?;
        Ok(row.into_customer(vehicles))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM vehicles WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_vehicles(&self, customer_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            "SELECT * FROM vehicles WHERE customer_id = $1 ORDER BY created_at ASC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VehicleRow::into_vehicle).collect())
    }
}
