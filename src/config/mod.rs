// Re-export all items from the submodules
mod env_vars;
mod run_config;

pub use env_vars::expand_env_vars;

pub use run_config::{
    RunConfig,
    load_config,
};
