pub mod media_list;
pub mod upload;
