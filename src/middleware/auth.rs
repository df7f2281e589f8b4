//! Middleware de autenticación JWT
//!
//! Todas las rutas `/admin/*` pasan por `require_admin`: el token debe estar
//! firmado con el secreto configurado y llevar un rol de administrador.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, AdminRole},
    },
};

/// Admin autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub role: AdminRole,
}

/// Middleware de autenticación de administradores
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt)?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid admin id in token".to_string()))?;

    let role = AdminRole::from_claim(&claims.role).ok_or_else(|| {
        tracing::warn!("🚫 Rol '{}' sin acceso de administrador ({})", claims.role, admin_id);
        AppError::Forbidden("Admin role required".to_string())
    })?;

    tracing::debug!("🔐 Admin autenticado: {} ({})", admin_id, role.as_str());
    request
        .extensions_mut()
        .insert(AuthenticatedAdmin { admin_id, role });

    Ok(next.run(request).await)
}
