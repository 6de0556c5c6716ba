pub mod doctor;
pub mod query;
pub mod repository;
pub mod slug;

pub use doctor::DoctorService;
pub use query::{DoctorQuery, Predicate, SortKey, SqlParam, Statement};
pub use repository::{DoctorRepository, MemoryDoctorRepository, PgDoctorRepository};
