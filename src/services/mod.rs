pub mod auth_service;
pub use auth_service::{
    AuthError, AuthService, CorretorAutenticado, MSG_CREDENCIAIS_INVALIDAS, ResultadoLogin,
};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod comissao_service;
pub use comissao_service::{
    ComissaoError, ComissaoService, ConfigComissaoInput, RegistroTransacao, TransacaoRegistrada,
    aplicar_percentual, computar_comissoes,
};

pub mod comissao_service_impl;
pub use comissao_service_impl::SeaOrmComissaoService;

pub mod email;
pub use email::EmailService;
