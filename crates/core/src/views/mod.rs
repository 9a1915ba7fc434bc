pub mod ladder;
pub mod path;
