// Library surface for the binary and for headless/integration tests.
pub mod app;
pub mod audio;
pub mod clock;
pub mod config;
pub mod error;
pub mod flash;
pub mod keys;
pub mod logging;
pub mod round;
pub mod runtime;
pub mod selector;
pub mod session;
pub mod sign;
pub mod ui;
