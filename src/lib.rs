//! Ephemeral PostgreSQL environments for integration testing.
//!
//! `provisioned` boots a disposable PostgreSQL container once per test run, applies an init
//! script, blocks until the database has signaled readiness and hands the suite a connection
//! string with TLS disabled; afterwards the container is torn down unconditionally, also if the
//! suite fails or panics.
//!
//! ```no_run
//! use provisioned::{run_suite, Config, Provisioner};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     dbname: "customers".to_string(),
//!     init_script: Some("testdata/initdb.sql".into()),
//!     ..Default::default()
//! };
//!
//! run_suite(Provisioner::new(config), |connection_string| async move {
//!     // Connect with the connection string and run the tests of the suite.
//!     Ok(())
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

mod engine;
mod provision;
mod suite;


pub use crate::{
    engine::{
        ContainerEngine, ContainerHandle, ContainerSpec, DockerContainer, DockerEngine,
        Error as EngineError, ReadyLine,
    },
    provision::{Config, Environment, Error as ProvisionError, Provisioner},
    suite::{connection_string, run_suite, Error as SuiteError},
};
