pub mod config_loader;
pub mod navigation;
pub mod notifications;
pub mod services;

pub use config_loader::load_config;
pub use navigation::BrowserNavigator;
pub use notifications::ToastNotifier;
