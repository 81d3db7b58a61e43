pub mod controller;
pub mod error;
pub mod outcome;
pub mod request;
