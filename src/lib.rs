pub mod gateways;
pub mod models;
pub mod office;
