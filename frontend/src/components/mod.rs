pub mod common;
pub mod error;
pub mod forms;
pub mod icons;
pub mod layout;
