pub mod dropdown;
pub mod header;
pub mod popup;
pub mod tables;
