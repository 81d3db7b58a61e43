pub mod control;
pub mod document;
pub mod element;
pub mod host;
