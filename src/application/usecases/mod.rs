pub mod describe_env;
pub mod inspect_config;
pub mod resolve_api_key;
