pub mod departments;
pub mod subjects;
