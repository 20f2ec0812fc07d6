pub mod book;
pub mod view_state;
