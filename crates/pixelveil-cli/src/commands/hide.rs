use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;
use pixelveil_core::PixelveilError;

use crate::CliResult;

/// Hides a text message in PNG and BMP images
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG or BMP file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "message_file",
        conflicts_with = "message_file"
    )]
    pub message: Option<String>,

    /// Read the message to hide from this text file
    #[arg(
        short = 'f',
        long = "message-file",
        value_name = "text file",
        required_unless_present = "message"
    )]
    pub message_file: Option<PathBuf>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let message = match (self.message, self.message_file) {
            (Some(message), _) => message,
            (None, Some(file)) => fs::read_to_string(file)?,
            (None, None) => return Err(PixelveilError::MissingMessage),
        };

        pixelveil_core::commands::hide(&self.media, &self.write_to_file, &message)?;

        info!("message hidden in {}", self.write_to_file.display());

        Ok(())
    }
}
