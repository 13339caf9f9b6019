pub mod generate;
pub mod info;
pub mod init;
pub mod preview;
