pub mod subject_source;

pub use subject_source::SubjectSource;
