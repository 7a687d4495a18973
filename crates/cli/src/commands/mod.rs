pub mod geocode;
pub mod serve;
pub mod shelters;
