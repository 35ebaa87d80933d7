pub mod adapter;
pub mod oracle;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use oracle::{EphemerisOracle, OracleError};
pub use types::{Body, RawPosition};
