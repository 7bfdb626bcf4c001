pub mod data_rate;

pub use data_rate::*;
