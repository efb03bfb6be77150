pub mod record;
pub mod show;
