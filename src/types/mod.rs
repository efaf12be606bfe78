use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Profile object returned by the auth endpoints. Every field defaults so a
/// sparse persisted value still loads; `data_cadastro` is an ISO timestamp
/// without timezone, as the provider emits it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct User {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub data_cadastro: Option<NaiveDateTime>,
}

/// Bearer token plus the profile it belongs to. The two always travel
/// together; the persistence rules live in `services::session`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub password: String,
}

/// Error payload shared by the auth endpoints.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope around the company lookup. `data` and `message` are each absent
/// depending on the outcome.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CnpjResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<CompanyRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Read-only projection of the registry lookup, mirroring the provider's
/// response field for field. Replaced wholesale on each successful lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CompanyRecord {
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub fantasia: String,
    #[serde(default)]
    pub abertura: String,
    #[serde(default)]
    pub situacao: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub porte: String,
    #[serde(default)]
    pub natureza_juridica: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub municipio: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub atividade_principal: Vec<Atividade>,
    #[serde(default)]
    pub atividades_secundarias: Vec<Atividade>,
    #[serde(default)]
    pub qsa: Vec<Socio>,
    #[serde(default)]
    pub capital_social: String,
    #[serde(default)]
    pub ultima_atualizacao: String,
}

/// CNAE activity entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Atividade {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub text: String,
}

/// Partner entry from the quadro societário.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Socio {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub qual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_success_envelope_parses() {
        let json = r#"{"success":true,"data":{"nome":"Acme","situacao":"ATIVA","qsa":[],"atividade_principal":[]}}"#;
        let envelope: CnpjResponse = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert!(envelope.message.is_none());
        let data = envelope.data.unwrap();
        assert_eq!(data.nome, "Acme");
        assert_eq!(data.situacao, "ATIVA");
        assert!(data.qsa.is_empty());
        assert!(data.atividade_principal.is_empty());
    }

    #[test]
    fn lookup_failure_envelope_parses() {
        let json = r#"{"success":false,"message":"Token inválido"}"#;
        let envelope: CnpjResponse = serde_json::from_str(json).unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Token inválido"));
    }

    #[test]
    fn login_response_parses() {
        let json = r#"{"access_token":"abc","user":{"id":1,"nome":"Ana","email":"ana@example.com","data_cadastro":"2024-03-01T10:20:30.400000"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.access_token, "abc");
        assert_eq!(response.user.nome, "Ana");
        assert!(response.user.data_cadastro.is_some());
    }

    #[test]
    fn sparse_user_still_parses() {
        let user: User = serde_json::from_str(r#"{"nome":"Ana"}"#).unwrap();
        assert_eq!(user.nome, "Ana");
        assert_eq!(user.id, 0);
        assert!(user.data_cadastro.is_none());
    }
}
