use std::path::PathBuf;

use clap::Args;
use codesticker_core::cipher::{DEFAULT_BYTE_SHIFT_KEY, DEFAULT_CAESAR_SHIFT};
use codesticker_core::{DecodeError, ScanResult, StickerError};

use crate::cli::MethodArg;
use crate::recent::RecentStore;
use crate::CliResult;

/// Scans a sticker PNG for a hidden message
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Source image that may contain a hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Cipher used at creation time, inferred when omitted
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Letter rotation used by the caesar cipher
    #[arg(long, value_name = "shift", default_value_t = DEFAULT_CAESAR_SHIFT)]
    pub shift: u8,

    /// Code point offset used by the byteshift cipher
    #[arg(long, value_name = "key", default_value_t = DEFAULT_BYTE_SHIFT_KEY)]
    pub key: u32,

    /// Fall back to the most recently created sticker when no message is found
    #[arg(long)]
    pub recent: bool,
}

impl ScanArgs {
    pub fn run(self) -> CliResult {
        let method = self.method.map(|m| m.into_method(self.shift, self.key));

        let scanned = codesticker_core::api::scan::prepare()
            .with_image(&self.image)
            .use_method(method)
            .execute();

        match scanned {
            Ok(result) => {
                print_result(&result);
                Ok(())
            }
            Err(StickerError::Decode(DecodeError::NoMessageFound)) => {
                if self.recent {
                    if let Some(record) = RecentStore::open_default().and_then(|s| s.lookup()) {
                        println!("No message found in the image, showing the most recent sticker instead:");
                        println!("{}", record.text);
                        println!("  cipher: {} (from local record)", record.method_label);
                        return Ok(());
                    }
                }
                println!("No message found.");
                Ok(())
            }
            Err(other) => Err(other),
        }
    }
}

fn print_result(result: &ScanResult) {
    println!("{}", result.text);
    println!(
        "  cipher: {} ({:?} security), confidence: {:?}",
        result.method.label(),
        result.method.security_level(),
        result.confidence
    );
}
