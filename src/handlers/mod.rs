pub mod health;
pub mod root;

pub use health::health_handler;
pub use root::root_handler;
