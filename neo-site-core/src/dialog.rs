//! Modal dialog bookkeeping.
//!
//! Tracks the open dialog and the element that had focus before it opened, so
//! focus can be handed back on close.

pub const DEMO_DIALOG: &str = "demoModal";
pub const PROJECT_DIALOG: &str = "projectModal";
pub const CONTACT_DIALOG: &str = "contactModal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPayload {
    None,
    Video { url: String },
    Project { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialog {
    pub id: String,
    pub payload: DialogPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    open: Option<OpenDialog>,
    return_focus: Option<String>,
}

impl DialogState {
    /// Open `id`, replacing any dialog already open.
    ///
    /// The focus target recorded by the first dialog in a chain is kept, so
    /// closing always returns to where the user started.
    pub fn open(
        &mut self,
        id: impl Into<String>,
        payload: DialogPayload,
        return_focus: Option<String>,
    ) {
        if self.open.is_none() {
            self.return_focus = return_focus;
        }
        self.open = Some(OpenDialog {
            id: id.into(),
            payload,
        });
    }

    /// Close whatever is open and yield the element id to refocus.
    pub fn close(&mut self) -> Option<String> {
        self.open.take()?;
        self.return_focus.take()
    }

    /// Close only if `id` is the open dialog.
    pub fn close_if(&mut self, id: &str) -> Option<String> {
        if self.is_open(id) { self.close() } else { None }
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_ref().is_some_and(|d| d.id == id)
    }

    #[must_use]
    pub const fn current(&self) -> Option<&OpenDialog> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn payload_for(&self, id: &str) -> Option<&DialogPayload> {
        self.open
            .as_ref()
            .filter(|d| d.id == id)
            .map(|d| &d.payload)
    }
}

#[must_use]
pub fn project_detail_title(id: &str) -> String {
    format!("Project #{id} details")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_returns_original_focus_target() {
        let mut state = DialogState::default();
        state.open(DEMO_DIALOG, DialogPayload::None, Some("play-btn".into()));
        state.open(
            PROJECT_DIALOG,
            DialogPayload::Project { id: "3".into() },
            Some("inside-demo".into()),
        );
        assert!(state.is_open(PROJECT_DIALOG));
        assert!(!state.is_open(DEMO_DIALOG));
        assert_eq!(state.close().as_deref(), Some("play-btn"));
        assert!(state.current().is_none());
        assert_eq!(state.close(), None);
    }

    #[test]
    fn close_if_ignores_other_dialogs() {
        let mut state = DialogState::default();
        state.open(CONTACT_DIALOG, DialogPayload::None, Some("cta".into()));
        assert_eq!(state.close_if(DEMO_DIALOG), None);
        assert!(state.is_open(CONTACT_DIALOG));
        assert_eq!(state.close_if(CONTACT_DIALOG).as_deref(), Some("cta"));
    }

    #[test]
    fn payload_is_scoped_to_dialog() {
        let mut state = DialogState::default();
        state.open(
            DEMO_DIALOG,
            DialogPayload::Video {
                url: "https://video.example/demo".into(),
            },
            None,
        );
        assert!(matches!(
            state.payload_for(DEMO_DIALOG),
            Some(DialogPayload::Video { .. })
        ));
        assert_eq!(state.payload_for(PROJECT_DIALOG), None);
        assert_eq!(project_detail_title("7"), "Project #7 details");
    }
}
