pub mod epoch_stats;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use trainer::{accuracy, train};
