pub mod dashboard;
pub mod paint;
pub mod panels;
pub mod plots;
