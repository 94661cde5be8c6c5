//! Seat Layout State
//!
//! Dirty/saving bookkeeping and status line for one seat layout editor.

use crate::error::AdminError;
use crate::models::SavePositionsResponse;

// Heroicons-style outlines, sized for the status line
const ICON_MOVED: &str = r#"<svg class="w-4 h-4 mr-2 text-yellow-600 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"/></svg>"#;
const ICON_SAVING: &str = r#"<svg class="w-4 h-4 mr-2 text-blue-500 inline animate-spin" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/></svg>"#;
const ICON_SAVED: &str = r#"<svg class="w-4 h-4 mr-2 text-teal-600 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
const ICON_FAILED: &str = r#"<svg class="w-4 h-4 mr-2 text-red-500 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;
const ICON_ERROR: &str = r#"<svg class="w-4 h-4 mr-2 text-red-500 inline" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></svg>"#;

/// Spinner shown in a submit button while its form is in flight
pub const ICON_PROCESSING: &str = r#"<svg class="w-4 h-4 mr-1.5 inline animate-spin" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/></svg>"#;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SaveStatus {
    /// Nothing to report; the page's own status text stays
    #[default]
    Idle,
    /// A seat was dropped somewhere new (carries its code)
    Moved(String),
    Saving,
    Saved { updated: u32, skipped: usize },
    /// Server answered `ok: false`
    Failed(Option<String>),
    /// Request never produced an envelope
    Error(String),
}

impl SaveStatus {
    pub fn message(&self) -> Option<String> {
        let text = match self {
            Self::Idle => return None,
            Self::Moved(code) => format!("Seat {code} moved. Click Save to persist"),
            Self::Saving => "Saving positions...".to_string(),
            Self::Saved { updated, skipped: 0 } => {
                format!("Successfully saved {updated} seat positions")
            }
            Self::Saved { updated, skipped } => {
                format!("Successfully saved {updated} seat positions ({skipped} skipped)")
            }
            Self::Failed(None) => "Failed to save positions".to_string(),
            Self::Failed(Some(reason)) => format!("Failed to save positions: {reason}"),
            Self::Error(message) => message.clone(),
        };
        Some(text)
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Moved(_) => Some(ICON_MOVED),
            Self::Saving => Some(ICON_SAVING),
            Self::Saved { .. } => Some(ICON_SAVED),
            Self::Failed(_) => Some(ICON_FAILED),
            Self::Error(_) => Some(ICON_ERROR),
        }
    }
}

/// State of one layout editor.
///
/// `dirty` is only cleared by a successful save; failures leave it alone so
/// the user can retry without dragging again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    pub dirty: bool,
    pub saving: bool,
    /// A seat was dropped after the in-flight save took its snapshot
    pub moved_during_save: bool,
    pub status: SaveStatus,
}

impl LayoutState {
    pub fn seat_moved(&mut self, code: &str) {
        self.dirty = true;
        if self.saving {
            self.moved_during_save = true;
        }
        self.status = SaveStatus::Moved(code.to_string());
    }

    /// Start a save. Returns false (and changes nothing) when there is
    /// nothing to save or a save is already in flight.
    pub fn begin_save(&mut self) -> bool {
        if !self.dirty || self.saving {
            return false;
        }
        self.saving = true;
        self.moved_during_save = false;
        self.status = SaveStatus::Saving;
        true
    }

    pub fn finish_save(&mut self, result: Result<SavePositionsResponse, AdminError>) {
        self.saving = false;
        let moved = std::mem::take(&mut self.moved_during_save);
        self.status = match result {
            Ok(response) if response.ok => {
                self.dirty = moved;
                SaveStatus::Saved {
                    updated: response.updated,
                    skipped: response.errors.len(),
                }
            }
            Ok(response) => SaveStatus::Failed(response.error.filter(|e| !e.is_empty())),
            Err(err) => SaveStatus::Error(err.to_string()),
        };
    }

    pub fn save_enabled(&self) -> bool {
        self.dirty && !self.saving
    }

    /// Pulse cue on the save control: unsaved moves exist
    pub fn save_highlighted(&self) -> bool {
        self.dirty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(updated: u32) -> Result<SavePositionsResponse, AdminError> {
        Ok(SavePositionsResponse {
            ok: true,
            updated,
            ..Default::default()
        })
    }

    #[test]
    fn test_save_without_changes_is_noop() {
        let mut state = LayoutState::default();
        assert!(!state.save_enabled());
        assert!(!state.begin_save());
        assert_eq!(state, LayoutState::default());
        assert!(!state.save_enabled());
    }

    #[test]
    fn test_drag_then_successful_save() {
        let mut state = LayoutState::default();
        state.seat_moved("A1");
        assert!(state.save_enabled());
        assert!(state.save_highlighted());
        assert_eq!(
            state.status.message().as_deref(),
            Some("Seat A1 moved. Click Save to persist")
        );

        assert!(state.begin_save());
        assert!(!state.save_enabled());
        assert_eq!(state.status, SaveStatus::Saving);

        state.finish_save(saved(1));
        assert!(!state.dirty);
        assert!(!state.save_enabled());
        assert!(!state.save_highlighted());
        let message = state.status.message().unwrap();
        assert!(message.contains('1'));
        assert_eq!(message, "Successfully saved 1 seat positions");
    }

    #[test]
    fn test_drag_then_rejected_save_keeps_changes() {
        let mut state = LayoutState::default();
        state.seat_moved("B2");
        assert!(state.begin_save());
        state.finish_save(Ok(SavePositionsResponse::default()));

        assert!(state.dirty);
        assert!(state.save_enabled());
        assert_eq!(state.status.message().as_deref(), Some("Failed to save positions"));
    }

    #[test]
    fn test_drag_then_transport_error_keeps_changes() {
        let mut state = LayoutState::default();
        state.seat_moved("B2");
        assert!(state.begin_save());
        state.finish_save(Err(AdminError::Transport("TypeError: Failed to fetch".into())));

        assert!(state.dirty);
        assert!(state.save_enabled());
        assert_eq!(
            state.status.message().as_deref(),
            Some("Error: TypeError: Failed to fetch")
        );
        assert!(state.status.icon().is_some());
    }

    #[test]
    fn test_save_in_flight_blocks_second_save() {
        let mut state = LayoutState::default();
        state.seat_moved("C3");
        assert!(state.begin_save());
        state.seat_moved("C4");
        assert!(!state.begin_save());
        assert!(state.saving);
    }

    #[test]
    fn test_move_during_save_stays_unsaved() {
        let mut state = LayoutState::default();
        state.seat_moved("A1");
        assert!(state.begin_save());
        state.seat_moved("A2");
        state.finish_save(saved(1));

        assert!(state.dirty);
        assert!(state.save_enabled());
        assert!(state.save_highlighted());

        assert!(state.begin_save());
        state.finish_save(saved(1));
        assert!(!state.dirty);
        assert!(!state.save_enabled());
    }

    #[test]
    fn test_saved_with_skipped_seats() {
        let mut state = LayoutState::default();
        state.seat_moved("D1");
        state.begin_save();
        state.finish_save(Ok(SavePositionsResponse {
            ok: true,
            updated: 3,
            errors: vec!["Seat 9 not found".into()],
            error: None,
        }));
        assert_eq!(
            state.status.message().as_deref(),
            Some("Successfully saved 3 seat positions (1 skipped)")
        );
    }

    #[test]
    fn test_failed_with_reason() {
        let status = SaveStatus::Failed(Some("Unauthorized".into()));
        assert_eq!(status.message().as_deref(), Some("Failed to save positions: Unauthorized"));
        assert_eq!(SaveStatus::Idle.message(), None);
        assert_eq!(SaveStatus::Idle.icon(), None);
    }
}
