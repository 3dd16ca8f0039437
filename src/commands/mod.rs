pub mod helpers;
pub mod init;
pub mod status;
pub mod update;
