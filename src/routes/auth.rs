use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn auth_cookie(access_token: &str) -> CookieJar {
    let access = Cookie::build(("access_token", access_token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(8))
        .build();
    CookieJar::new().add(access)
}

fn clear_auth_cookie() -> CookieJar {
    let access = Cookie::build(("access_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(access)
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "A senha deve ter pelo menos 8 caracteres.".to_string(),
        ));
    }
    Ok(())
}

/// The first registered user becomes the administrator.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if req.email.trim().is_empty() || req.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Por favor, preencha todos os campos obrigatórios.".to_string(),
        ));
    }
    validate_password(&req.password)?;

    let is_admin = db::users::count_all(&state.pool).await? == 0;

    let password_hash = password::hash(&req.password)?;
    let user = db::users::create(&state.pool, req.email.trim(), &password_hash, req.name.trim(), is_admin)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict("Este e-mail já está cadastrado.".to_string())
            }
            _ => AppError::Database(e),
        })?;

    let claims = Claims::new(user.id, user.is_admin);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok((auth_cookie(&token), Json(AuthResponse { access_token: token })))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let user = db::users::find_by_email(&state.pool, req.email.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas.".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized("Credenciais inválidas.".to_string()));
    }

    let claims = Claims::new(user.id, user.is_admin);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok((auth_cookie(&token), Json(AuthResponse { access_token: token })))
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (
        clear_auth_cookie(),
        Json(MessageResponse {
            message: "Sessão encerrada.".to_string(),
        }),
    )
}

pub async fn change_password(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_password(&req.new_password)?;

    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))?;

    let valid = password::verify(&req.current_password, &user.password_hash)?;
    if !valid {
        return Err(AppError::Unauthorized("Senha atual incorreta.".to_string()));
    }

    let password_hash = password::hash(&req.new_password)?;
    db::users::update_password(&state.pool, user.id, &password_hash).await?;

    Ok(Json(MessageResponse {
        message: "Senha alterada com sucesso.".to_string(),
    }))
}

/// Administrator-only password management for another account.
pub async fn reset_password(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    auth.require_admin()?;
    validate_password(&req.new_password)?;

    let user = db::users::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado.".to_string()))?;

    let password_hash = password::hash(&req.new_password)?;
    db::users::update_password(&state.pool, user.id, &password_hash).await?;

    Ok(Json(MessageResponse {
        message: "Senha redefinida com sucesso.".to_string(),
    }))
}
