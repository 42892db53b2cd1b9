mod index;
pub use index::Index;
mod chat;
pub use chat::ChatRedirect;

#[path = "404.rs"]
mod not_found;
pub use not_found::NotFound;
mod course;
pub use course::ResponsibleAiCourse;
