mod loader;

pub use loader::load_config;
pub use loader::load_local_config;
pub use loader::BannerConfig;
pub use loader::Config;
pub use loader::ConfigError;
