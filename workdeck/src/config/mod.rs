mod errors;
mod model;
mod storage;

pub(crate) use model::{ShellConfig, ShellTab};
pub(crate) use storage::load_initial_config;
