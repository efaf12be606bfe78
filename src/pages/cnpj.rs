use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ErrorAlert;
use crate::contexts::SessionContext;
use crate::services::ApiService;
use crate::types::CompanyRecord;
use crate::utils::cnpj::{format_cnpj, is_valid_cnpj, strip_cnpj};

const INVALID_CNPJ_MESSAGE: &str = "CNPJ deve ter 14 dígitos";

#[derive(Properties, PartialEq)]
pub struct CnpjConsultaProps {
    pub on_back: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(CnpjConsulta)]
pub fn cnpj_consulta(props: &CnpjConsultaProps) -> Html {
    let session = use_context::<SessionContext>().expect("no session context found");
    let cnpj = use_state(String::new);
    let is_loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let company = use_state(|| None::<CompanyRecord>);

    let oninput = {
        let cnpj = cnpj.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cnpj.set(format_cnpj(&input.value()));
        })
    };

    let onsubmit = {
        let cnpj = cnpj.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let company = company.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            error_message.set(None);
            company.set(None);

            let value = (*cnpj).clone();
            if !is_valid_cnpj(&value) {
                error_message.set(Some(INVALID_CNPJ_MESSAGE.to_string()));
                return;
            }
            let digits = strip_cnpj(&value);

            // The lookup is authenticated; a missing token just makes the
            // server answer with its own error message.
            let token = session
                .session
                .as_ref()
                .map(|s| s.token.clone())
                .unwrap_or_default();

            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let company = company.clone();

            is_loading.set(true);

            spawn_local(async move {
                match ApiService::consultar_cnpj(&digits, &token).await {
                    Ok(record) => company.set(Some(record)),
                    Err(error) => {
                        log::error!("falha na consulta de CNPJ: {:?}", error);
                        error_message.set(Some(error.user_message()));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let onclick_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let onclick_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm border-b">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center py-4">
                        <div class="flex items-center">
                            <button
                                onclick={onclick_back}
                                class="mr-4 text-gray-600 hover:text-gray-900 font-medium"
                            >
                                {"← Voltar"}
                            </button>
                            <div>
                                <h1 class="text-2xl font-bold text-gray-900">{"Consulta CNPJ"}</h1>
                                <p class="text-sm text-gray-600">
                                    {"Busque informações atualizadas da Receita Federal"}
                                </p>
                            </div>
                        </div>
                        <button
                            onclick={onclick_logout}
                            class="border border-gray-300 hover:bg-gray-100 text-gray-700 font-medium py-2 px-4 rounded"
                        >
                            {"Sair"}
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                <div class="px-4 py-6 sm:px-0">

                    <div class="bg-white rounded-lg shadow mb-6 p-6">
                        <h2 class="text-lg font-semibold text-gray-900">{"Consultar CNPJ"}</h2>
                        <p class="text-sm text-gray-600 mb-4">
                            {"Digite o CNPJ da empresa para buscar informações na Receita Federal"}
                        </p>

                        <form onsubmit={onsubmit} class="space-y-4">
                            if let Some(error) = (*error_message).as_ref() {
                                <ErrorAlert message={error.clone()} />
                            }

                            <div class="flex gap-4">
                                <div class="flex-1">
                                    <label for="cnpj" class="block text-sm font-medium text-gray-700 mb-2">
                                        {"CNPJ"}
                                    </label>
                                    <input
                                        id="cnpj"
                                        type="text"
                                        value={(*cnpj).clone()}
                                        oninput={oninput}
                                        maxlength="18"
                                        required=true
                                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                        placeholder="00.000.000/0000-00"
                                    />
                                </div>
                                <div class="flex items-end">
                                    <button
                                        type="submit"
                                        disabled={*is_loading}
                                        class="bg-blue-500 hover:bg-blue-700 disabled:bg-blue-300 text-white font-bold py-2 px-4 rounded"
                                    >
                                        if *is_loading {
                                            {"Consultando..."}
                                        } else {
                                            {"Consultar"}
                                        }
                                    </button>
                                </div>
                            </div>
                        </form>
                    </div>

                    if let Some(company) = (*company).as_ref() {
                        { company_panel(company) }
                    }
                </div>
            </main>
        </div>
    }
}

/// Result panel: company info, address, then the conditional contact,
/// activity and partner sections, and the (not yet wired) document actions.
fn company_panel(company: &CompanyRecord) -> Html {
    let mut endereco = company.logradouro.clone();
    if !company.numero.is_empty() {
        endereco.push_str(&format!(", {}", company.numero));
    }
    if !company.complemento.is_empty() {
        endereco.push_str(&format!(", {}", company.complemento));
    }

    let has_contact = !company.telefone.is_empty() || !company.email.is_empty();

    html! {
        <div class="space-y-6">

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Informações da Empresa"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Razão Social"}</p>
                        <p class="text-lg font-semibold">{&company.nome}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Nome Fantasia"}</p>
                        <p class="text-lg">{or_missing(&company.fantasia)}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"CNPJ"}</p>
                        <p class="text-lg font-mono">{format_cnpj(&company.cnpj)}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Situação"}</p>
                        <div class="mt-1">
                            <span class={format!("inline-block px-2 py-1 rounded text-xs font-semibold {}", situacao_badge_class(&company.situacao))}>
                                {&company.situacao}
                            </span>
                        </div>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Tipo"}</p>
                        <p>{&company.tipo}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Porte"}</p>
                        <p>{&company.porte}</p>
                    </div>
                    <div class="md:col-span-2">
                        <p class="text-sm font-medium text-gray-500">{"Natureza Jurídica"}</p>
                        <p>{&company.natureza_juridica}</p>
                    </div>
                </div>

                <hr class="my-4 border-gray-200" />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Data de Abertura"}</p>
                        <p>{&company.abertura}</p>
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-500">{"Capital Social"}</p>
                        <p>{or_missing(&company.capital_social)}</p>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Endereço"}</h2>
                <div class="space-y-2">
                    <p class="text-lg">{endereco}</p>
                    <p>{format!("{} - {}/{}", company.bairro, company.municipio, company.uf)}</p>
                    <p>{format!("CEP: {}", company.cep)}</p>
                </div>
            </div>

            if has_contact {
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Contato"}</h2>
                    <div class="space-y-2">
                        if !company.telefone.is_empty() {
                            <p>{&company.telefone}</p>
                        }
                        if !company.email.is_empty() {
                            <p>{&company.email}</p>
                        }
                    </div>
                </div>
            }

            if !company.atividade_principal.is_empty() {
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Atividade Principal"}</h2>
                    { for company.atividade_principal.iter().map(|atividade| html! {
                        <div class="space-y-1">
                            <p class="font-medium">{&atividade.code}</p>
                            <p class="text-gray-600">{&atividade.text}</p>
                        </div>
                    }) }
                </div>
            }

            if !company.qsa.is_empty() {
                <div class="bg-white rounded-lg shadow p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Quadro Societário"}</h2>
                    <div class="space-y-3">
                        { for company.qsa.iter().map(|socio| html! {
                            <div class="flex justify-between items-center p-3 bg-gray-50 rounded-lg">
                                <div>
                                    <p class="font-medium">{&socio.nome}</p>
                                    <p class="text-sm text-gray-600">{&socio.qual}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            }

            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex gap-4">
                    <button class="flex-1 bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
                        {"Gerar Contrato"}
                    </button>
                    <button class="flex-1 border border-gray-300 hover:bg-gray-100 text-gray-700 font-medium py-2 px-4 rounded">
                        {"Gerar Procuração"}
                    </button>
                </div>
            </div>

        </div>
    }
}

fn or_missing(value: &str) -> String {
    if value.is_empty() {
        "Não informado".to_string()
    } else {
        value.to_string()
    }
}

/// Badge classes for the registry status. The match is case-insensitive and
/// unknown statuses fall back to gray.
fn situacao_badge_class(situacao: &str) -> &'static str {
    match situacao.to_uppercase().as_str() {
        "ATIVA" => "bg-green-100 text-green-800",
        "SUSPENSA" => "bg-yellow-100 text-yellow-800",
        "INAPTA" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_mapping_is_case_insensitive() {
        assert_eq!(situacao_badge_class("ATIVA"), "bg-green-100 text-green-800");
        assert_eq!(situacao_badge_class("ativa"), "bg-green-100 text-green-800");
        assert_eq!(
            situacao_badge_class("Suspensa"),
            "bg-yellow-100 text-yellow-800"
        );
        assert_eq!(situacao_badge_class("inapta"), "bg-red-100 text-red-800");
    }

    #[test]
    fn unknown_status_falls_back_to_gray() {
        assert_eq!(situacao_badge_class("BAIXADA"), "bg-gray-100 text-gray-800");
        assert_eq!(situacao_badge_class(""), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn short_input_is_rejected_with_the_exact_message() {
        assert!(!is_valid_cnpj("11.222.333/0001-8"));
        assert_eq!(INVALID_CNPJ_MESSAGE, "CNPJ deve ter 14 dígitos");
    }

    #[test]
    fn missing_values_render_as_not_informed() {
        assert_eq!(or_missing(""), "Não informado");
        assert_eq!(or_missing("R$ 100.000,00"), "R$ 100.000,00");
    }
}
