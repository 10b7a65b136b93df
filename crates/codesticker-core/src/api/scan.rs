use std::path::{Path, PathBuf};

use crate::cipher::CipherMethod;
use crate::codec::ScanResult;
use crate::commands::{self, StickerOptions};
use crate::error::StickerError;

pub fn prepare() -> ScanApi {
    ScanApi::default()
}

/// Fluent builder for scanning a sticker file back into a message.
#[derive(Default, Debug)]
pub struct ScanApi {
    image: Option<PathBuf>,
    method: Option<CipherMethod>,
    options: StickerOptions,
}

impl ScanApi {
    pub fn with_options(mut self, options: StickerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Set the cipher method used at creation time.
    pub fn with_method(mut self, method: CipherMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the cipher method used at creation time.
    /// If `None` is passed, the method is inferred by trial, the result is
    /// tagged with low confidence then.
    pub fn use_method(mut self, method: Option<CipherMethod>) -> Self {
        self.method = method;
        self
    }

    pub fn execute(self) -> Result<ScanResult, StickerError> {
        let Some(image) = self.image else {
            return Err(StickerError::CarrierNotSet);
        };

        commands::scan(&image, self.method, &self.options)
    }
}
