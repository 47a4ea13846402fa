pub mod analyze;
pub mod biases;
pub mod chat;
pub mod dispatch;
pub mod grade;
pub mod history;
pub mod questions;
pub mod report;
pub mod shared;
