pub mod core;
pub mod generators;
pub mod services;
pub mod tables;
