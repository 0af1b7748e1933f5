//! Outbound e-mail notifications via an HTTP mail API.
//!
//! Falhas de envio são registradas e não propagam; nenhuma operação de
//! negócio depende do e-mail ter saído.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::EmailConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailPayload<'a> {
    to: &'a str,
    subject: &'a str,
    body: String,
}

fn corpo_credencial(nome: &str, senha: &str, frontend_url: &str) -> String {
    format!(
        "Olá {nome}, sua senha provisória de acesso é: {senha}\n\
         Ela deverá ser trocada no primeiro login.\n\
         Acesse: {frontend_url}"
    )
}

#[derive(Clone)]
pub struct EmailService {
    client: Client,
    config: EmailConfig,
}

impl EmailService {
    #[must_use]
    pub fn new(config: EmailConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Entrega a credencial provisória ao corretor. O plaintext só existe no
    /// corpo do e-mail; não vai para o log nem fica retido aqui.
    pub async fn enviar_credencial_emitida(&self, email: &str, nome: &str, senha: &str) {
        let body = corpo_credencial(nome, senha, &self.config.frontend_url);
        self.enviar(email, "Acesso ao sistema", body).await;
    }

    pub async fn enviar_senha_alterada(&self, email: &str, nome: &str) {
        let body = format!(
            "Olá {nome}, a senha da sua conta foi alterada. \
             Se não foi você, contate a administração imediatamente."
        );
        self.enviar(email, "Senha alterada", body).await;
    }

    async fn enviar(&self, to: &str, subject: &str, body: String) {
        if !self.config.enabled {
            return;
        }

        let payload = EmailPayload { to, subject, body };

        let result = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                info!(subject, "E-mail enviado");
            }
            Ok(resp) => {
                warn!(subject, status = %resp.status(), "API de e-mail recusou o envio");
            }
            Err(e) => {
                warn!(subject, error = %e, "Falha ao enviar e-mail");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpo_credencial_carrega_a_senha() {
        let corpo = corpo_credencial("Maria", "ABC123XYZ0", "https://imobix.local");
        assert!(corpo.contains("ABC123XYZ0"));
        assert!(corpo.contains("Maria"));
        assert!(corpo.contains("https://imobix.local"));
    }
}
