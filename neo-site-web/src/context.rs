//! Page-wide state shared through a Yew context.
//!
//! Everything that used to live in globals of the page script (open dialog,
//! focus to restore, sound flag, pending notices) is owned by one reducer
//! created in [`crate::app::App`].

use std::rc::Rc;

use neo_site_core::{DialogPayload, DialogState, Notice, SiteConfig, SoundState, Theme};
use yew::prelude::*;

/// A request to move focus once the DOM has settled.
///
/// `seq` changes on every request so effects re-run even when the same
/// element is targeted twice in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    pub seq: u64,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    pub config: Rc<SiteConfig>,
    pub theme: Theme,
    pub sound: SoundState,
    pub dialogs: DialogState,
    pub notices: Vec<Notice>,
    pub loaded: bool,
    pub focus: Option<FocusRequest>,
}

impl SiteState {
    #[must_use]
    pub fn new(config: SiteConfig, theme: Theme) -> Self {
        Self {
            config: Rc::new(config),
            theme,
            sound: SoundState::default(),
            dialogs: DialogState::default(),
            notices: Vec::new(),
            loaded: false,
            focus: None,
        }
    }

    fn request_focus(&mut self, target: String) {
        let seq = self.focus.as_ref().map_or(1, |f| f.seq + 1);
        self.focus = Some(FocusRequest { seq, target });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SiteAction {
    SetTheme(Theme),
    ToggleSound,
    OpenDialog {
        id: String,
        payload: DialogPayload,
        return_focus: Option<String>,
    },
    /// Close `id` if it is the open dialog.
    CloseDialog(String),
    PushNotice(Notice),
    DismissNotice(u64),
    Loaded,
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SiteAction::SetTheme(theme) => {
                if theme == self.theme {
                    return self;
                }
                next.theme = theme;
            }
            SiteAction::ToggleSound => next.sound = self.sound.toggled(),
            SiteAction::OpenDialog {
                id,
                payload,
                return_focus,
            } => next.dialogs.open(id, payload, return_focus),
            SiteAction::CloseDialog(id) => {
                if !self.dialogs.is_open(&id) {
                    return self;
                }
                if let Some(target) = next.dialogs.close_if(&id) {
                    next.request_focus(target);
                }
            }
            SiteAction::PushNotice(notice) => next.notices.push(notice),
            SiteAction::DismissNotice(id) => {
                if !self.notices.iter().any(|n| n.id == id) {
                    return self;
                }
                next.notices.retain(|n| n.id != id);
            }
            SiteAction::Loaded => {
                if self.loaded {
                    return self;
                }
                next.loaded = true;
            }
        }
        Rc::new(next)
    }
}

pub type SiteContext = UseReducerHandle<SiteState>;

/// Access the site context. `None` outside the [`crate::app::App`] provider.
#[hook]
pub fn use_site() -> Option<SiteContext> {
    use_context::<SiteContext>()
}

/// Open `id`, remembering the currently focused element for later.
pub fn open_dialog(ctx: &SiteContext, id: &str, payload: DialogPayload) {
    ctx.dispatch(SiteAction::OpenDialog {
        id: id.to_string(),
        payload,
        return_focus: crate::dom::active_element_id(),
    });
}

pub fn close_dialog(ctx: &SiteContext, id: &str) {
    ctx.dispatch(SiteAction::CloseDialog(id.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_site_core::{CONTACT_DIALOG, PROJECT_DIALOG};

    fn state() -> Rc<SiteState> {
        Rc::new(SiteState::new(SiteConfig::default(), Theme::Dark))
    }

    fn notice(id: u64) -> Notice {
        Notice {
            id,
            message: "sent".into(),
            expires_at_ms: 3000.0,
        }
    }

    #[test]
    fn closing_a_dialog_requests_focus_on_the_opener() {
        let s = state().reduce(SiteAction::OpenDialog {
            id: CONTACT_DIALOG.into(),
            payload: DialogPayload::None,
            return_focus: Some("cta".into()),
        });
        assert!(s.dialogs.is_open(CONTACT_DIALOG));

        let s = s.reduce(SiteAction::CloseDialog(CONTACT_DIALOG.into()));
        assert!(s.dialogs.current().is_none());
        assert_eq!(
            s.focus,
            Some(FocusRequest {
                seq: 1,
                target: "cta".into()
            })
        );

        let s = s
            .reduce(SiteAction::OpenDialog {
                id: PROJECT_DIALOG.into(),
                payload: DialogPayload::Project { id: "2".into() },
                return_focus: Some("cta".into()),
            })
            .reduce(SiteAction::CloseDialog(PROJECT_DIALOG.into()));
        assert_eq!(s.focus.as_ref().map(|f| f.seq), Some(2));
    }

    #[test]
    fn closing_another_dialog_is_a_no_op() {
        let s = state().reduce(SiteAction::OpenDialog {
            id: CONTACT_DIALOG.into(),
            payload: DialogPayload::None,
            return_focus: None,
        });
        let same = s.clone().reduce(SiteAction::CloseDialog(PROJECT_DIALOG.into()));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn notices_are_pushed_and_dismissed_by_id() {
        let s = state()
            .reduce(SiteAction::PushNotice(notice(1)))
            .reduce(SiteAction::PushNotice(notice(2)))
            .reduce(SiteAction::DismissNotice(1));
        assert_eq!(s.notices.len(), 1);
        assert_eq!(s.notices[0].id, 2);
    }

    #[test]
    fn sound_theme_and_loading_flags() {
        let s = state()
            .reduce(SiteAction::ToggleSound)
            .reduce(SiteAction::SetTheme(Theme::Light))
            .reduce(SiteAction::Loaded);
        assert!(!s.sound.enabled());
        assert_eq!(s.theme, Theme::Light);
        assert!(s.loaded);
        let again = s.clone().reduce(SiteAction::Loaded);
        assert!(Rc::ptr_eq(&s, &again));
    }
}
