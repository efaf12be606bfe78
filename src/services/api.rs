use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::types::{
    ApiMessage, CnpjResponse, CompanyRecord, LoginRequest, LoginResponse, RegisterRequest, User,
};

const API_BASE: &str = "https://biancomeister.pythonanywhere.com/api";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure, no usable response from the server.
    Network(String),
    /// The server answered with an error message meant for the user.
    Server(String),
}

impl ApiError {
    /// What the screens display: server messages verbatim, transport failures
    /// as a generic connectivity error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Erro de conexão com o servidor".to_string(),
            ApiError::Server(message) => message.clone(),
        }
    }
}

impl From<gloo::net::Error> for ApiError {
    fn from(error: gloo::net::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

pub struct ApiService;

impl ApiService {
    pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&format!("{}/login", API_BASE))
            .header("Content-Type", "application/json")
            .json(credentials)?
            .send()
            .await?;

        Self::handle_response(response, "Erro ao fazer login").await
    }

    pub async fn register(data: &RegisterRequest) -> Result<User, ApiError> {
        let response = Request::post(&format!("{}/register", API_BASE))
            .header("Content-Type", "application/json")
            .json(data)?
            .send()
            .await?;

        Self::handle_response(response, "Erro ao criar conta").await
    }

    /// Authenticated company lookup. The endpoint wraps its result in a
    /// `{ success, data, message }` envelope even on HTTP 200, so both the
    /// status and the `success` flag gate the result.
    pub async fn consultar_cnpj(cnpj: &str, token: &str) -> Result<CompanyRecord, ApiError> {
        let response = Request::get(&format!("{}/cnpj/{}", API_BASE, cnpj))
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status_ok = response.ok();
        let envelope: CnpjResponse = response.json().await?;

        if status_ok && envelope.success {
            envelope
                .data
                .ok_or_else(|| ApiError::Server("Erro ao consultar CNPJ".to_string()))
        } else {
            Err(ApiError::Server(
                envelope
                    .message
                    .unwrap_or_else(|| "Erro ao consultar CNPJ".to_string()),
            ))
        }
    }

    async fn handle_response<T>(response: Response, fallback: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        if response.ok() {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(|body| body.message);
            Err(ApiError::Server(
                message.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_map_to_generic_message() {
        let error = ApiError::Network("fetch failed".to_string());
        assert_eq!(error.user_message(), "Erro de conexão com o servidor");
    }

    #[test]
    fn server_messages_pass_through_verbatim() {
        let error = ApiError::Server("Token inválido".to_string());
        assert_eq!(error.user_message(), "Token inválido");
    }
}
