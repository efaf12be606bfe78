use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub message: String,
}

/// Inline red message box used by the form screens.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &AlertProps) -> Html {
    html! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
            {&props.message}
        </div>
    }
}

/// Green counterpart for confirmations.
#[function_component(SuccessAlert)]
pub fn success_alert(props: &AlertProps) -> Html {
    html! {
        <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
            {&props.message}
        </div>
    }
}
