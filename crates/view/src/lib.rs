pub mod details;
pub mod error;
pub mod form;
pub mod render;
pub mod state;
