pub mod export;
pub mod option;
pub mod question;
pub mod report;
pub mod submission;
pub mod survey;
pub mod user;
