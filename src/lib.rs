pub mod extract;
pub mod fetch;
pub mod identity;
pub mod notebook;
pub mod workspace;
