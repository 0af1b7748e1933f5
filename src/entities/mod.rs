pub mod prelude;

pub mod atividades;
pub mod comissoes;
pub mod config_comissoes;
pub mod corretores;
pub mod imoveis;
pub mod inquilinos;
pub mod leads;
pub mod proprietarios;
pub mod transacoes;
