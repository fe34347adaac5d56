pub mod dto;

pub use dto::{AlertDto, MessageLogDto, SyncMessagesResponse};
