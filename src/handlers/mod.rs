pub mod geo_data;

pub use geo_data::*;
