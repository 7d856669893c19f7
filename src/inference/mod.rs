pub mod client;
pub mod preprocess;
