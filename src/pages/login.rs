use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ErrorAlert;
use crate::services::{ApiService, SessionStore};
use crate::types::{LoginRequest, Session};

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<Session>,
    pub on_switch_to_register: Callback<()>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let email_input = use_node_ref();
    let password_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let error_message = error_message.clone();
        let is_loading = is_loading.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_input = email_input.cast::<HtmlInputElement>().unwrap();
            let password_input = password_input.cast::<HtmlInputElement>().unwrap();

            let email = email_input.value();
            let password = password_input.value();

            if email.is_empty() || password.is_empty() {
                error_message.set(Some("Preencha todos os campos".to_string()));
                return;
            }

            let credentials = LoginRequest { email, password };

            let error_message = error_message.clone();
            let is_loading = is_loading.clone();
            let on_login = on_login.clone();

            is_loading.set(true);
            error_message.set(None);

            spawn_local(async move {
                match ApiService::login(&credentials).await {
                    Ok(response) => {
                        let session = Session {
                            token: response.access_token,
                            user: response.user,
                        };
                        SessionStore::save(&session);
                        on_login.emit(session);
                    }
                    Err(error) => {
                        log::error!("falha no login: {:?}", error);
                        error_message.set(Some(error.user_message()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let on_register_click = {
        let on_switch = props.on_switch_to_register.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-md p-6">
                <h1 class="text-xl font-bold text-center text-gray-900 mb-1">
                    {"Gerador de Contratos e Procurações"}
                </h1>
                <h2 class="text-lg text-center text-gray-600 mb-6">{"Entre com sua conta"}</h2>

                if let Some(error) = (*error_message).as_ref() {
                    <ErrorAlert message={error.clone()} />
                }

                <form {onsubmit}>
                    <div class="mb-4">
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-2">
                            {"E-mail"}
                        </label>
                        <input
                            ref={email_input}
                            type="email"
                            id="email"
                            name="email"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="seu@email.com"
                        />
                    </div>

                    <div class="mb-6">
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-2">
                            {"Senha"}
                        </label>
                        <input
                            ref={password_input}
                            type="password"
                            id="password"
                            name="password"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Digite sua senha"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full bg-blue-500 hover:bg-blue-700 disabled:bg-blue-300 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                    >
                        if *is_loading {
                            {"Entrando..."}
                        } else {
                            {"Entrar"}
                        }
                    </button>
                </form>

                <div class="text-center mt-4">
                    <p class="text-sm text-gray-600">
                        {"Não tem uma conta? "}
                        <button
                            type="button"
                            onclick={on_register_click}
                            class="text-blue-500 hover:text-blue-700 font-medium"
                        >
                            {"Cadastre-se"}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
