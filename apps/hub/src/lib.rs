pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod orchestrator;
pub mod protocol;
pub mod runner;
pub mod shutdown;

pub use config::HubConfig;
pub use error::HubError;
pub use errors::ExitStatus;
pub use runner::run_hub;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    hub_test_support::logging::init();
}
