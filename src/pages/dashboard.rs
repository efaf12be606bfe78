use yew::prelude::*;

use crate::contexts::SessionContext;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_logout: Callback<()>,
    pub on_navigate_to_cnpj: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_context::<SessionContext>().expect("no session context found");

    // Unreachable through the view dispatch, which only mounts the dashboard
    // for a logged-in user.
    let Some(current) = session.session.clone() else {
        return html! {};
    };

    let onclick_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let onclick_cnpj = {
        let on_navigate = props.on_navigate_to_cnpj.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm border-b">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center py-4">
                        <div>
                            <h1 class="text-2xl font-bold text-gray-900">
                                {"Gerador de Contratos e Procurações"}
                            </h1>
                            <p class="text-sm text-gray-600">
                                {format!("Bem-vindo, {}", current.user.nome)}
                            </p>
                            if let Some(data_cadastro) = current.user.data_cadastro {
                                <p class="text-xs text-gray-500">
                                    {format!("Cliente desde {}", data_cadastro.format("%m/%Y"))}
                                </p>
                            }
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
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">

                        <div
                            class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow cursor-pointer p-6"
                            onclick={onclick_cnpj}
                        >
                            <h3 class="text-lg font-semibold text-indigo-600 mb-1">
                                {"Consultar CNPJ"}
                            </h3>
                            <p class="text-sm text-gray-600 mb-4">
                                {"Busque dados atualizados de empresas na Receita Federal"}
                            </p>
                            <button class="w-full bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
                                {"Consultar Empresa"}
                            </button>
                        </div>

                        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
                            <h3 class="text-lg font-semibold text-blue-600 mb-1">
                                {"Gerar Contrato"}
                            </h3>
                            <p class="text-sm text-gray-600 mb-4">
                                {"Crie contratos personalizados com dados da Receita Federal"}
                            </p>
                            <button class="w-full border border-gray-300 hover:bg-gray-100 text-gray-700 font-medium py-2 px-4 rounded">
                                {"Novo Contrato"}
                            </button>
                        </div>

                        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
                            <h3 class="text-lg font-semibold text-green-600 mb-1">
                                {"Gerar Procuração"}
                            </h3>
                            <p class="text-sm text-gray-600 mb-4">
                                {"Crie procurações com informações empresariais atualizadas"}
                            </p>
                            <button class="w-full border border-gray-300 hover:bg-gray-100 text-gray-700 font-medium py-2 px-4 rounded">
                                {"Nova Procuração"}
                            </button>
                        </div>

                        <div class="bg-white rounded-lg shadow hover:shadow-lg transition-shadow p-6">
                            <h3 class="text-lg font-semibold text-purple-600 mb-1">
                                {"Histórico"}
                            </h3>
                            <p class="text-sm text-gray-600 mb-4">
                                {"Visualize e baixe documentos gerados anteriormente"}
                            </p>
                            <button class="w-full bg-gray-200 hover:bg-gray-300 text-gray-700 font-medium py-2 px-4 rounded">
                                {"Ver Histórico"}
                            </button>
                        </div>

                    </div>

                    <div class="mt-8">
                        <div class="bg-white rounded-lg shadow p-6">
                            <h2 class="text-xl font-bold text-gray-900">{"Como funciona"}</h2>
                            <p class="text-sm text-gray-600 mb-6">
                                {"Processo simples para gerar seus documentos"}
                            </p>
                            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                                { for STEPS.iter().map(|step| html! {
                                    <div class="text-center">
                                        <div class={format!("{} rounded-full w-12 h-12 flex items-center justify-center mx-auto mb-3", step.circle_class)}>
                                            <span class={format!("{} font-bold", step.number_class)}>{step.number}</span>
                                        </div>
                                        <h3 class="font-medium mb-2">{step.title}</h3>
                                        <p class="text-sm text-gray-600">{step.text}</p>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

struct Step {
    number: &'static str,
    circle_class: &'static str,
    number_class: &'static str,
    title: &'static str,
    text: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "1",
        circle_class: "bg-indigo-100",
        number_class: "text-indigo-600",
        title: "Consulte o CNPJ",
        text: "Busque e valide os dados da empresa na Receita Federal",
    },
    Step {
        number: "2",
        circle_class: "bg-blue-100",
        number_class: "text-blue-600",
        title: "Informe o CNPJ",
        text: "Digite o CNPJ da empresa para buscar os dados na Receita Federal",
    },
    Step {
        number: "3",
        circle_class: "bg-green-100",
        number_class: "text-green-600",
        title: "Escolha o Modelo",
        text: "Selecione entre contrato ou procuração e personalize conforme necessário",
    },
    Step {
        number: "4",
        circle_class: "bg-purple-100",
        number_class: "text-purple-600",
        title: "Receba por Email",
        text: "O documento será gerado e enviado para seu email automaticamente",
    },
];
