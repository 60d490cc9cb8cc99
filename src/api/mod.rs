mod database;
mod database_factory;
mod mood_service;
mod period;
mod rating_service;
mod recipe_gateway;
mod recipe_gateway_factory;
mod resource_service;
mod resource_service_factory;
pub mod config;
pub mod models;
#[cfg(any(test, feature = "mock-api"))]
pub mod mock;

pub use database::*;
pub use database_factory::*;
pub use mood_service::*;
pub use period::*;
pub use rating_service::*;
pub use recipe_gateway::*;
pub use recipe_gateway_factory::*;
pub use resource_service::*;
pub use resource_service_factory::*;
