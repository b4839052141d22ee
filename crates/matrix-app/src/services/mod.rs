pub mod pipeline;
pub mod qr;
pub mod rotation;
pub mod stats_client;
pub mod validator;

pub use pipeline::{transform, Pipeline, Transformed};
pub use qr::{factorize_qr, FactorizationError, QrFactorization};
pub use rotation::rotate_clockwise_90;
pub use stats_client::{EnrichmentError, StatsClient};
pub use validator::{validate, ValidationError};
