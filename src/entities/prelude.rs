pub use super::atividades::Entity as Atividades;
pub use super::comissoes::Entity as Comissoes;
pub use super::config_comissoes::Entity as ConfigComissoes;
pub use super::corretores::Entity as Corretores;
pub use super::imoveis::Entity as Imoveis;
pub use super::inquilinos::Entity as Inquilinos;
pub use super::leads::Entity as Leads;
pub use super::proprietarios::Entity as Proprietarios;
pub use super::transacoes::Entity as Transacoes;
