mod config;
mod state;
mod database;
mod services;
mod utils;
mod models;
mod middleware;
mod controllers;
mod repositories;
mod routes;
mod dto;

use anyhow::Result;
use axum::{
    Router,
    routing::get,
    response::Json,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, error};
use dotenvy::dotenv;
use serde_json::json;

use config::environment::EnvironmentConfig;
use state::AppState;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use services::customer_search_service::CustomerSearchService;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Workshop Management - API del taller");
    info!("================================================");

    let env_config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Cargar el directorio de clientes en memoria para las búsquedas
    let directory = match CustomerSearchService::new(pool.clone()).await {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("❌ Error cargando el directorio de clientes: {}", e);
            return Err(anyhow::anyhow!("Error del directorio: {}", e));
        }
    };

    let cors = if env_config.is_production() {
        cors_middleware_with_origins(env_config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = env_config.server_url().parse()?;

    // Crear router de la API
    let app_state = AppState::new(pool, env_config, directory);

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/customer", routes::customer_routes::create_customer_router())
        .nest("/api/appointment", routes::appointment_routes::create_appointment_router())
        .nest("/api/loaner", routes::loaner_routes::create_loaner_router())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("👤 Endpoints MVC - Customer:");
    info!("   POST /api/customer - Registrar cliente");
    info!("   GET  /api/customer - Listar clientes");
    info!("   GET  /api/customer/search - Buscar clientes por texto libre");
    info!("   GET  /api/customer/:customer_id - Obtener cliente");
    info!("   PUT  /api/customer/:customer_id - Actualizar cliente");
    info!("   DELETE /api/customer/:customer_id - Eliminar cliente");
    info!("   GET  /api/customer/:customer_id/appointments - Citas del cliente");
    info!("🚗 Endpoints MVC - Vehicle:");
    info!("   POST /api/customer/:customer_id/vehicles - Añadir vehículo");
    info!("   GET  /api/customer/:customer_id/vehicles - Listar vehículos");
    info!("   PUT  /api/customer/:customer_id/vehicles/:vehicle_id - Actualizar vehículo");
    info!("   DELETE /api/customer/:customer_id/vehicles/:vehicle_id - Eliminar vehículo");
    info!("📅 Endpoints MVC - Appointment:");
    info!("   POST /api/appointment - Agendar cita");
    info!("   GET  /api/appointment - Listar citas (panel general)");
    info!("   GET  /api/appointment/schedule - Agenda agrupada por día");
    info!("   GET  /api/appointment/:id - Obtener cita");
    info!("   PUT  /api/appointment/:id - Actualizar cita");
    info!("   PUT  /api/appointment/:id/complete - Marcar cita completada");
    info!("   DELETE /api/appointment/:id - Eliminar cita");
    info!("🚙 Endpoints MVC - Loaner:");
    info!("   POST /api/loaner - Registrar coche de préstamo");
    info!("   GET  /api/loaner - Listar flota de préstamo");
    info!("   GET  /api/loaner/:id - Obtener coche de préstamo");
    info!("   PUT  /api/loaner/:id - Actualizar coche de préstamo");
    info!("   DELETE /api/loaner/:id - Eliminar coche de préstamo");
    info!("   POST /api/loaner/:id/assign - Asignar coche a un cliente");
    info!("   POST /api/loaner/:id/return - Devolver coche a la flota");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API del taller funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "workshop_management"
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
