//! Consulta de regime tributário por CNPJ.
//!
//! Fluxo de uma consulta: [`cnpj::normalizar`] -> [`registry::RegistryClient`]
//! -> [`summary::Resumo`]. As interfaces ([`ui`] no terminal, [`api`] via HTTP)
//! apenas recebem o resultado pronto.

pub mod api;
pub mod cnpj;
pub mod error;
pub mod models;
pub mod registry;
pub mod summary;
pub mod ui;

pub use cnpj::Cnpj;
pub use error::LookupError;
pub use models::{Classification, RegistryRecord};
pub use registry::{RegistryClient, RegistryConfig};
pub use summary::Resumo;
