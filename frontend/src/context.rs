//! Application-wide state, provided once at the root.

use std::rc::Rc;

use blogdesk_shared::{
    draft::{Draft, DraftSlot},
    favorites::{FavoriteItem, FavoritesStore},
    session::{Session, SESSION_DAYS},
    theme::{load_dark_mode, save_dark_mode},
};
use yew::prelude::*;

use crate::browser::{self, LocalStorage};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Session,
}

pub enum SessionAction {
    SignedIn(Session),
    SignedOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let session = match action {
            SessionAction::SignedIn(session) => session,
            SessionAction::SignedOut => Session::anonymous(),
        };
        Rc::new(Self {
            session,
        })
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

/// Persist the session cookies and publish the new session.
pub fn sign_in(ctx: &SessionContext, session: Session) {
    browser::store_session(&session, SESSION_DAYS);
    ctx.dispatch(SessionAction::SignedIn(session));
}

pub fn sign_out(ctx: &SessionContext) {
    browser::clear_session();
    ctx.dispatch(SessionAction::SignedOut);
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesState {
    pub store: FavoritesStore<LocalStorage>,
}

pub enum FavoritesAction {
    Toggle(FavoriteItem),
    Remove(String),
    Clear,
}

impl Reducible for FavoritesState {
    type Action = FavoritesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            FavoritesAction::Toggle(item) => {
                store.toggle(item);
            },
            FavoritesAction::Remove(id) => {
                store.remove(&id);
            },
            FavoritesAction::Clear => store.clear(),
        }
        Rc::new(Self {
            store,
        })
    }
}

pub type FavoritesContext = UseReducerHandle<FavoritesState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Self {
                dark: !self.dark,
            }),
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

pub type ArticleDraft = Draft<web_sys::File>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftState {
    pub slot: DraftSlot<web_sys::File>,
}

pub enum DraftAction {
    Stage(ArticleDraft),
    Clear,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut slot = self.slot.clone();
        match action {
            DraftAction::Stage(draft) => {
                if let Some(previous) = slot.get() {
                    if previous.preview_image_url != draft.preview_image_url {
                        browser::revoke_object_url(&previous.preview_image_url);
                    }
                }
                slot.stage(draft);
            },
            DraftAction::Clear => {
                if let Some(previous) = slot.take() {
                    browser::revoke_object_url(&previous.preview_image_url);
                }
            },
        }
        Rc::new(Self {
            slot,
        })
    }
}

pub type DraftContext = UseReducerHandle<DraftState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.next_id += 1;
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    message,
                });
            },
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Handle for raising toasts from pages.
#[derive(Clone, PartialEq)]
pub struct Notifier(Option<ToastContext>);

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        match &self.0 {
            Some(ctx) => ctx.dispatch(ToastAction::Push(kind, message)),
            None => web_sys::console::warn_1(&format!("toast without provider: {}", message).into()),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    Notifier(use_context::<ToastContext>())
}

#[hook]
pub fn use_session() -> Session {
    use_context::<SessionContext>()
        .map(|ctx| ctx.session.clone())
        .unwrap_or_else(browser::read_session)
}

#[derive(Properties, PartialEq)]
pub struct AppStateProviderProps {
    pub children: Html,
}

/// Creates every context. Session starts from the cookies, favorites and the
/// theme from local storage.
#[function_component(AppStateProvider)]
pub fn app_state_provider(props: &AppStateProviderProps) -> Html {
    let session = use_reducer(|| SessionState {
        session: browser::read_session(),
    });
    let favorites = use_reducer(|| FavoritesState {
        store: FavoritesStore::load(LocalStorage),
    });
    let theme = use_reducer(|| ThemeState {
        dark: load_dark_mode(&LocalStorage),
    });
    let draft = use_reducer(DraftState::default);
    let toasts = use_reducer(ToastState::default);

    use_effect_with(theme.dark, |dark| {
        save_dark_mode(&LocalStorage, *dark);
        browser::apply_theme(*dark);
        || ()
    });

    html! {
        <ContextProvider<SessionContext> context={session}>
            <ContextProvider<FavoritesContext> context={favorites}>
                <ContextProvider<ThemeContext> context={theme}>
                    <ContextProvider<DraftContext> context={draft}>
                        <ContextProvider<ToastContext> context={toasts}>
                            { props.children.clone() }
                        </ContextProvider<ToastContext>>
                    </ContextProvider<DraftContext>>
                </ContextProvider<ThemeContext>>
            </ContextProvider<FavoritesContext>>
        </ContextProvider<SessionContext>>
    }
}
