use std::path::{Path, PathBuf};

use crate::cipher::CipherMethod;
use crate::commands::{self, StickerOptions};
use crate::error::StickerError;

pub fn prepare() -> CreateApi {
    CreateApi::default()
}

/// Fluent builder for creating a sticker file.
#[derive(Default, Debug)]
pub struct CreateApi {
    message: Option<String>,
    method: Option<CipherMethod>,
    output: Option<PathBuf>,
    options: StickerOptions,
}

impl CreateApi {
    pub fn with_options(mut self, options: StickerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Set the cipher method, defaults to base64 when not set.
    pub fn with_method(mut self, method: CipherMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StickerError> {
        let Some(message) = self.message else {
            return Err(StickerError::MissingMessage);
        };
        let Some(output) = self.output else {
            return Err(StickerError::TargetNotSet);
        };
        let method = self.method.unwrap_or(CipherMethod::Base64Obfuscation);

        commands::create(&message, method, &output, &self.options)
    }
}
