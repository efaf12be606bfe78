use std::rc::Rc;

use yew::prelude::*;

use crate::services::SessionStore;
use crate::types::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Login(Session),
    Logout,
}

/// In-memory session state behind the context. The reducer is pure; the
/// browser store is written by whoever dispatches.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Restore from the browser store, done once when the provider mounts.
    fn restore() -> Self {
        Self {
            session: SessionStore::load(),
        }
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Login(session) => Rc::new(SessionState {
                session: Some(session),
            }),
            SessionAction::Logout => Rc::new(SessionState { session: None }),
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, Debug, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let state = use_reducer(SessionState::restore);

    html! {
        <ContextProvider<SessionContext> context={state}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
