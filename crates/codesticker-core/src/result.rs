use crate::error::StickerError;

pub type Result<T> = std::result::Result<T, StickerError>;
