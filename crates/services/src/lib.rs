#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod practice_service;
pub mod roster_service;

pub use hub_core::Clock;

pub use app_services::AppServices;
pub use error::RosterServiceError;
pub use practice_service::PracticeService;
pub use roster_service::RosterService;
