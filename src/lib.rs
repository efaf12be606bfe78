use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;

pub mod components;
pub mod contexts;
pub mod pages;
pub mod services;
pub mod types;
pub mod utils;
pub mod view;

use contexts::{SessionAction, SessionContext, SessionProvider};
use pages::{CnpjConsulta, Dashboard, Login, Register};
use services::SessionStore;
use types::{Session, User};
use view::ViewState;

#[function_component(Root)]
fn root() -> Html {
    let session = use_context::<SessionContext>().expect("no session context found");
    let view = {
        let has_session = session.session.is_some();
        use_state(move || ViewState::initial(has_session))
    };

    let on_login = {
        let session = session.clone();
        let view = view.clone();
        Callback::from(move |new_session: Session| {
            session.dispatch(SessionAction::Login(new_session));
            view.set(ViewState::Dashboard);
        })
    };

    let on_logout = {
        let session = session.clone();
        let view = view.clone();
        Callback::from(move |_| {
            SessionStore::clear();
            session.dispatch(SessionAction::Logout);
            view.set(ViewState::Login);
        })
    };

    let on_registered = Callback::from(|user: User| {
        log::info!("novo usuário cadastrado: {}", user.email);
    });

    let show_login = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewState::Login))
    };
    let show_register = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewState::Register))
    };
    let show_dashboard = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewState::Dashboard))
    };
    let show_cnpj = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewState::Cnpj))
    };

    match *view {
        ViewState::Login => html! {
            <Login on_login={on_login} on_switch_to_register={show_register} />
        },
        ViewState::Register => html! {
            <Register on_registered={on_registered} on_switch_to_login={show_login} />
        },
        ViewState::Dashboard => html! {
            <Dashboard on_logout={on_logout} on_navigate_to_cnpj={show_cnpj} />
        },
        ViewState::Cnpj => html! {
            <CnpjConsulta on_back={show_dashboard} on_logout={on_logout} />
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <Root />
        </SessionProvider>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Gerador de Contratos frontend starting...");
    yew::Renderer::<App>::new().render();
}
