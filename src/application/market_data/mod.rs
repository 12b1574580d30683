pub mod price_path;
pub mod series_generator;
pub mod series_stats;

pub use series_generator::PriceSeriesGenerator;
