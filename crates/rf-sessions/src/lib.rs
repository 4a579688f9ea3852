pub mod config;
pub mod export;
pub mod grouping;
pub mod models;
pub mod ordering;
pub mod pipeline;
pub mod review;
pub mod scoring;
pub mod stats;
pub mod untoggle;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use export::*;
pub use grouping::*;
pub use models::*;
pub use ordering::*;
pub use pipeline::*;
pub use review::*;
pub use scoring::*;
pub use stats::*;
pub use untoggle::*;
