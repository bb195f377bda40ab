//! Fetch / Mutate / Reconcile
//!
//! Applies request outcomes to a page's [`RecordSet`] and decides what the
//! user is told. Local state only changes after the server acknowledged;
//! a failed request never touches the records.

use crate::error::ApiError;
use crate::feedback::{
    DialogState, MSG_CONNECTION, MSG_DELETED, MSG_DELETE_FAILED, MSG_LIKE_FAILED,
};
use crate::models::{Keyed, Post};
use crate::store::{FetchTicket, RecordSet};

/// How a page surfaces a failed list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailurePolicy {
    /// Open the dialog with this message (network failures use the connection message)
    Dialog(&'static str),
    /// Log only; the page keeps showing its previous or empty state
    LogOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Like,
    Unlike,
}

/// Apply a list fetch result
pub fn apply_fetch<T: Keyed>(
    set: &mut RecordSet<T>,
    ticket: FetchTicket,
    result: Result<Vec<T>, ApiError>,
    policy: FetchFailurePolicy,
) -> Option<DialogState> {
    match result {
        Ok(records) => {
            let count = records.len();
            if set.replace(ticket, records) {
                log::info!("[SYNC] loaded {} records", count);
            } else {
                log::debug!("[SYNC] dropped stale response with {} records", count);
            }
            None
        }
        Err(ApiError::Cancelled) => None,
        Err(err) => {
            log::error!("[SYNC] fetch failed: {}", err);
            set.mark_failed(ticket);
            match policy {
                FetchFailurePolicy::Dialog(message) => Some(DialogState::error(match err {
                    ApiError::Network(_) => MSG_CONNECTION,
                    _ => message,
                })),
                FetchFailurePolicy::LogOnly => None,
            }
        }
    }
}

/// Apply a delete result for `key`
pub fn apply_delete<T: Keyed>(
    set: &mut RecordSet<T>,
    key: &str,
    result: Result<(), ApiError>,
) -> Option<DialogState> {
    match result {
        Ok(()) => {
            set.remove(key);
            log::info!("[SYNC] deleted {}", key);
            Some(DialogState::success(MSG_DELETED))
        }
        Err(ApiError::Cancelled) => None,
        Err(err) => {
            log::error!("[SYNC] delete {} failed: {}", key, err);
            Some(DialogState::error(match err {
                ApiError::Network(_) => MSG_CONNECTION,
                _ => MSG_DELETE_FAILED,
            }))
        }
    }
}

/// Apply a like/unlike acknowledgment to the post keyed by `recipe_id`
pub fn apply_like<R>(
    set: &mut RecordSet<Post>,
    recipe_id: &str,
    change: LikeChange,
    result: Result<R, ApiError>,
) -> Option<DialogState> {
    match result {
        Ok(_) => {
            set.update(recipe_id, |post| {
                post.likes = match change {
                    LikeChange::Like => post.likes.saturating_add(1),
                    LikeChange::Unlike => post.likes.saturating_sub(1),
                };
            });
            None
        }
        Err(ApiError::Cancelled) => None,
        Err(err) => {
            log::error!("[SYNC] {:?} {} failed: {}", change, recipe_id, err);
            Some(DialogState::error(match err {
                ApiError::Network(_) => MSG_CONNECTION,
                _ => MSG_LIKE_FAILED,
            }))
        }
    }
}
