pub mod atividade;
pub mod comissao;
pub mod corretor;
pub mod imovel;
pub mod inquilino;
pub mod lead;
pub mod proprietario;
pub mod transacao;
