use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Unveils a text message hidden in an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the recovered message to this file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output text file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let message = pixelveil_core::commands::unveil(&self.media, self.output_file.as_deref())?;

        match self.output_file {
            Some(output_file) => info!("message written to {}", output_file.display()),
            None => println!("{message}"),
        }

        Ok(())
    }
}
