pub mod aggregate;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod record;
pub mod report;
pub mod stats;
