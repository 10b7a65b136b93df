use clap::{Parser, Subcommand, ValueEnum};
use codesticker_core::CipherMethod;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Create(create::CreateArgs),
    Scan(scan::ScanArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MethodArg {
    Base64,
    Caesar,
    Byteshift,
}

impl MethodArg {
    pub fn into_method(self, shift: u8, key: u32) -> CipherMethod {
        match self {
            MethodArg::Base64 => CipherMethod::Base64Obfuscation,
            MethodArg::Caesar => CipherMethod::CaesarShift(shift),
            MethodArg::Byteshift => CipherMethod::ByteShift(key),
        }
    }
}
