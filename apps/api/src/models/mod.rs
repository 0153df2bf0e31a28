pub mod catalog;
pub mod feedback;
