pub mod about;
pub mod dashboard;
pub mod demo;
pub mod panels;
pub mod plot;
pub mod table;
pub mod visualization;
