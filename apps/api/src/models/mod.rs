pub mod posting;
pub mod student;
