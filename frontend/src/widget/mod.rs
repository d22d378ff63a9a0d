pub mod controller;
pub mod floating;
pub mod gesture;
pub mod listener;
pub mod position;

pub use floating::FloatingContact;
