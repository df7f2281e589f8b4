use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, Level};

use fleet_admin::config::{DatabaseConfig, EnvironmentConfig};
use fleet_admin::database::DatabaseConnection;
use fleet_admin::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚕 Fleet Admin API ({})", config.environment);
    info!("================================================");

    let db_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(db_connection.pool().clone(), config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /health");
    info!("   *     /admin/vendors, /admin/vehicle-owners, /admin/drivers, /admin/cars");
    info!("   *     /admin/accounts, /admin/orders");
    info!("   POST  /admin/search-vehicle-owner, /admin/add-money-to-vehicle-owner");
    info!("   GET   /admin/profile, /admin/list, /admin/:admin_id");
    info!("   GET   /admin/admin-wallet/ledger, /admin/admin-wallet/balance, /admin/razorpay-transactions");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
