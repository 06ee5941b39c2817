pub mod applications;
pub mod user_config;
pub mod users;
