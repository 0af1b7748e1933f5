use super::ApiError;

pub fn validate_id(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "ID inválido: {}. O ID deve ser um inteiro positivo",
            id
        )));
    }
    Ok(id)
}

pub fn validate_email(email: &str) -> Result<&str, ApiError> {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err(ApiError::validation("Email não pode ser vazio"));
    }

    if !trimmed.contains('@') || trimmed.len() > 254 {
        return Err(ApiError::validation(format!("Email inválido: {}", trimmed)));
    }

    Ok(trimmed)
}

pub fn validate_percentual(pontos_base: i32) -> Result<i32, ApiError> {
    // Pontos-base: 10000 = 100%.
    if !(0..=10_000).contains(&pontos_base) {
        return Err(ApiError::validation(format!(
            "Percentual inválido: {}. Use pontos-base entre 0 e 10000",
            pontos_base
        )));
    }
    Ok(pontos_base)
}

pub fn validate_valor(centavos: i64) -> Result<i64, ApiError> {
    if centavos <= 0 {
        return Err(ApiError::validation(
            "O valor deve ser positivo, em centavos",
        ));
    }
    Ok(centavos)
}
