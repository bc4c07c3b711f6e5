mod command_result;
pub mod context;
pub mod init;
pub mod list;
pub mod new;
pub mod show;
pub mod sync;

pub use command_result::*;
