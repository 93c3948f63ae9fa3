//! Shared test scaffolding: in-memory databases with the full migration set
//! applied, plus row fixtures for exercising schema constraints directly.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{test_setup, test_setup_bare, TestSetup};

pub mod prelude {
    pub use crate::{fixtures, test_setup, test_setup_bare, TestError, TestSetup};
}
