pub mod department;
pub mod subject;

pub use department::Department;
pub use subject::{Subject, SubjectWithDepartment};
