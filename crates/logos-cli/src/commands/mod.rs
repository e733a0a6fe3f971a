//! Command implementations.

pub mod ethics;
pub mod evaluate;
pub mod ingest;
pub mod init;

pub use self::ethics::execute_evaluate_ethics;
pub use self::evaluate::{execute_evaluate_argument, Evaluation};
pub use self::ingest::{execute_ingest, run_pipeline, Ingestion};
pub use self::init::execute_init;
