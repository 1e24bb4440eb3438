mod pack_config;
mod pack_manifest;

pub use pack_config::*;
pub use pack_manifest::*;
