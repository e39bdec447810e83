pub mod mysql_channel_directory;

pub use mysql_channel_directory::MySqlChannelDirectory;
