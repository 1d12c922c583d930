pub mod extract;
pub mod history;
pub mod scan;
