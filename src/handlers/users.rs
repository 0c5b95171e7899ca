use axum::extract::Extension;

use crate::database::models::user::PublicUser;
use crate::database::DatabaseManager;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::store::UserDirectory;

/// GET /v1/users/profile - the authenticated caller's public profile
pub async fn profile(Extension(auth): Extension<AuthUser>) -> ApiResult<PublicUser> {
    let pool = DatabaseManager::pool().await?;
    let directory = UserDirectory::new(pool);

    let user = directory.get(&auth.user_id).await?;

    Ok(ApiResponse::success(vec![user.transform()]))
}
