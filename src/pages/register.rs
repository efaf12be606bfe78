use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{ErrorAlert, SuccessAlert};
use crate::services::ApiService;
use crate::types::{RegisterRequest, User};
use crate::utils::validation::is_valid_email;

#[derive(Properties, PartialEq)]
pub struct RegisterProps {
    pub on_registered: Callback<User>,
    pub on_switch_to_login: Callback<()>,
}

#[function_component(Register)]
pub fn register(props: &RegisterProps) -> Html {
    let nome_input = use_node_ref();
    let email_input = use_node_ref();
    let password_input = use_node_ref();
    let confirm_password_input = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let onsubmit = {
        let nome_input = nome_input.clone();
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let confirm_password_input = confirm_password_input.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let is_loading = is_loading.clone();
        let on_registered = props.on_registered.clone();
        let on_switch_to_login = props.on_switch_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let nome_input = nome_input.cast::<HtmlInputElement>().unwrap();
            let email_input = email_input.cast::<HtmlInputElement>().unwrap();
            let password_input = password_input.cast::<HtmlInputElement>().unwrap();
            let confirm_password_input = confirm_password_input.cast::<HtmlInputElement>().unwrap();

            let nome = nome_input.value();
            let email = email_input.value();
            let password = password_input.value();
            let confirm_password = confirm_password_input.value();

            if nome.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
                error_message.set(Some("Preencha todos os campos".to_string()));
                return;
            }

            if !is_valid_email(&email) {
                error_message.set(Some("E-mail inválido".to_string()));
                return;
            }

            if password != confirm_password {
                error_message.set(Some("As senhas não coincidem".to_string()));
                return;
            }

            if password.len() < 6 {
                error_message.set(Some("A senha deve ter pelo menos 6 caracteres".to_string()));
                return;
            }

            let request = RegisterRequest {
                nome,
                email,
                password,
            };

            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let is_loading = is_loading.clone();
            let on_registered = on_registered.clone();
            let on_switch_to_login = on_switch_to_login.clone();

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            spawn_local(async move {
                match ApiService::register(&request).await {
                    Ok(user) => {
                        success_message.set(Some(
                            "Cadastro realizado com sucesso! Redirecionando para o login..."
                                .to_string(),
                        ));
                        on_registered.emit(user);
                        gloo::timers::callback::Timeout::new(2000, move || {
                            on_switch_to_login.emit(());
                        })
                        .forget();
                    }
                    Err(error) => {
                        log::error!("falha no cadastro: {:?}", error);
                        error_message.set(Some(error.user_message()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let on_login_click = {
        let on_switch = props.on_switch_to_login.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-md p-6">
                <h2 class="text-2xl font-bold text-center text-gray-900 mb-6">{"Criar conta"}</h2>

                if let Some(error) = (*error_message).as_ref() {
                    <ErrorAlert message={error.clone()} />
                }

                if let Some(success) = (*success_message).as_ref() {
                    <SuccessAlert message={success.clone()} />
                }

                <form {onsubmit}>
                    <div class="mb-4">
                        <label for="nome" class="block text-sm font-medium text-gray-700 mb-2">
                            {"Nome completo"}
                        </label>
                        <input
                            ref={nome_input}
                            type="text"
                            id="nome"
                            name="nome"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Seu nome"
                        />
                    </div>

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

                    <div class="mb-4">
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
                            placeholder="Crie uma senha (mínimo 6 caracteres)"
                        />
                    </div>

                    <div class="mb-6">
                        <label for="confirm_password" class="block text-sm font-medium text-gray-700 mb-2">
                            {"Confirmar senha"}
                        </label>
                        <input
                            ref={confirm_password_input}
                            type="password"
                            id="confirm_password"
                            name="confirm_password"
                            required=true
                            class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                            placeholder="Repita a senha"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="w-full bg-blue-500 hover:bg-blue-700 disabled:bg-blue-300 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                    >
                        if *is_loading {
                            {"Criando conta..."}
                        } else {
                            {"Criar conta"}
                        }
                    </button>
                </form>

                <div class="text-center mt-4">
                    <p class="text-sm text-gray-600">
                        {"Já tem uma conta? "}
                        <button
                            type="button"
                            onclick={on_login_click}
                            class="text-blue-500 hover:text-blue-700 font-medium"
                        >
                            {"Entrar"}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
