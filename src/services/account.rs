//! 账户工作流

use tracing::info;

use crate::domain::{data_domains, Account};
use crate::error::{ApiError, ApiResult};
use crate::render::DataMutations;
use crate::state::AppState;

/// 更新账户资料
pub async fn update_account(
    state: &AppState,
    display_name: &str,
    email: &str,
) -> ApiResult<(Account, DataMutations)> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err(ApiError::bad_request("display name must not be empty"));
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::bad_request("email address is invalid"));
    }

    let account = state
        .account
        .update(display_name.to_string(), email.to_string())
        .await;
    info!(display_name = %account.display_name, "account profile updated");

    Ok((account, DataMutations::of([data_domains::ACCOUNT])))
}
