use regex::Regex;

pub fn is_valid_email(email: &str) -> bool {
    let email_regex = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    email_regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("joao.silva+contratos@empresa.com.br"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("sem-arroba"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@dominio"));
    }
}
