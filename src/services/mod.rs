pub mod gateway;
pub mod openai_compat;
pub mod provider;
