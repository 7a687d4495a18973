pub mod aqi;
pub mod debug;
pub mod missing;
pub mod shelters;
pub mod tracker;
