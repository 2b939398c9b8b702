//! Per-request account context.
//!
//! Item routes (`/{account_id}`) run [`resolve_account`] before the handler.
//! It is generic over any store offering [`AccountLookup`], so every façade
//! mounts the same middleware over its own store view.

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use service::accounts::{Account, AccountLookup};

use crate::errors::JsonApiError;

/// The account addressed by the current request's path.
#[derive(Debug, Clone)]
pub struct AccountCtx(pub Account);

/// Parse `account_id` and load the account into request extensions.
///
/// A non-numeric id is a 400 and never reaches the store. A failed lookup
/// is a 404, as is an integer no account id can hold.
pub async fn resolve_account<S>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError>
where
    S: AccountLookup + ?Sized + 'static,
{
    let id: i32 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) if is_integer(&raw_id) => {
            debug!(raw_id = %raw_id, "account id out of range");
            return Err(JsonApiError::not_found());
        }
        Err(_) => {
            debug!(raw_id = %raw_id, "account id is not an integer");
            return Err(JsonApiError::bad_request());
        }
    };

    let account = store.get(id).await.map_err(|e| {
        debug!(id, err = %e, "account lookup failed");
        JsonApiError::not_found()
    })?;

    req.extensions_mut().insert(AccountCtx(account));
    Ok(next.run(req).await)
}

/// Optional sign followed by at least one ASCII digit.
fn is_integer(raw: &str) -> bool {
    let digits = raw.strip_prefix(&['-', '+'][..]).unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
