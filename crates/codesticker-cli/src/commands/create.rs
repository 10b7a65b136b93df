use std::path::PathBuf;

use clap::Args;
use codesticker_core::cipher::{DEFAULT_BYTE_SHIFT_KEY, DEFAULT_CAESAR_SHIFT};
use log::warn;

use crate::cli::MethodArg;
use crate::recent::RecentStore;
use crate::CliResult;

/// Creates a sticker PNG with a hidden message
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Cipher used to obfuscate the message
    #[arg(long, value_enum, default_value = "base64")]
    pub method: MethodArg,

    /// Letter rotation used by the caesar cipher
    #[arg(long, value_name = "shift", default_value_t = DEFAULT_CAESAR_SHIFT)]
    pub shift: u8,

    /// Code point offset used by the byteshift cipher
    #[arg(long, value_name = "key", default_value_t = DEFAULT_BYTE_SHIFT_KEY)]
    pub key: u32,

    /// Final sticker will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output: PathBuf,
}

impl CreateArgs {
    pub fn run(self) -> CliResult {
        let method = self.method.into_method(self.shift, self.key);

        codesticker_core::api::create::prepare()
            .with_message(&self.message)
            .with_method(method)
            .with_output(&self.output)
            .execute()?;

        // best effort convenience record, never part of the codec contract
        if let Some(store) = RecentStore::open_default() {
            if let Err(e) = store.record(&self.message, method.label()) {
                warn!("could not record recent sticker: {e}");
            }
        }

        println!(
            "Sticker saved to {} ({} cipher, {:?} security)",
            self.output.display(),
            method.label(),
            method.security_level()
        );

        Ok(())
    }
}
