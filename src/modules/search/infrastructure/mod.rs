pub mod dto;
pub mod mapper;

pub use mapper::{ResponseMapper, SOURCE_KEY};
