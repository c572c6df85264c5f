pub mod run;
pub mod sweep;
