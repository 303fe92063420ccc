pub mod bounds;
pub mod locate;
pub mod project;
