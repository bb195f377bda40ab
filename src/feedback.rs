//! Feedback Channel
//!
//! Per-page dialog state: either closed or open with a title and message.
//! The last `open` wins; only the user's acknowledgment closes it.

pub const TITLE_SUCCESS: &str = "Success";
pub const TITLE_ERROR: &str = "Error";

pub const MSG_DELETED: &str = "Post has been deleted!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete the recipe. Please try again.";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch recipes. Please try again.";
pub const MSG_LIKE_FAILED: &str = "Failed to update likes. Please try again.";
pub const MSG_CONNECTION: &str = "An error occurred. Please check your connection and try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub is_open: bool,
    pub title: String,
    pub message: String,
}

impl DialogState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_open: true,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::open(TITLE_SUCCESS, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::open(TITLE_ERROR, message)
    }

    pub fn is_error(&self) -> bool {
        self.is_open && self.title == TITLE_ERROR
    }

    /// Acknowledge: back to the closed state with cleared text
    pub fn close(&mut self) {
        *self = Self::closed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_open_errors_are_errors() {
        assert!(DialogState::error(MSG_FETCH_FAILED).is_error());
        assert!(!DialogState::success(MSG_DELETED).is_error());

        let mut dialog = DialogState::error(MSG_CONNECTION);
        dialog.close();
        assert!(!dialog.is_error());
    }

    #[test]
    fn test_open_then_acknowledge() {
        let mut dialog = DialogState::closed();
        assert!(!dialog.is_open);

        dialog = DialogState::success(MSG_DELETED);
        assert!(dialog.is_open);
        assert_eq!(dialog.title, "Success");

        dialog.close();
        assert_eq!(dialog, DialogState::closed());
        assert!(dialog.title.is_empty());
    }

    #[test]
    fn test_last_open_wins() {
        let mut dialog = DialogState::success(MSG_DELETED);
        dialog = DialogState::error(MSG_DELETE_FAILED);
        assert_eq!(dialog.title, "Error");
        assert_eq!(dialog.message, MSG_DELETE_FAILED);
    }
}
