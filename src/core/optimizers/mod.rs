pub mod config;
pub mod history;
pub mod snell;


// 재수출
pub use config::SnellConfig;
pub use history::GradientHistory;
pub use snell::SnellOptimizer;
