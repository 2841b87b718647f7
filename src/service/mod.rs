//! Service layer containing business logic orchestration.

mod hook_service;

pub use hook_service::HookService;
