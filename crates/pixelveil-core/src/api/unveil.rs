use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::media::Media;
use crate::PixelveilError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the recovered message will be written to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Write the recovered message to the given file
    /// If `None` is passed, the message is only returned to the caller
    pub fn use_output_file(mut self, output_file: Option<impl AsRef<Path>>) -> Self {
        self.output_file = output_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and return the recovered message
    pub fn execute(self) -> Result<String, PixelveilError> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelveilError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let message = media.unveil_message()?;

        if let Some(output_file) = self.output_file {
            let mut target_file = File::create(output_file)
                .map_err(|source| PixelveilError::WriteError { source })?;

            target_file
                .write_all(message.text.as_bytes())
                .map_err(|source| PixelveilError::WriteError { source })?;
        }

        Ok(message.text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::read_to_string;

    use tempfile::tempdir;

    use crate::media::Media;
    use crate::test_utils::prepare_carrier;
    use crate::Persist;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier_path = temp_dir.path().join("carrier.png");
        let stego_path = temp_dir.path().join("stego.png");
        let message_path = temp_dir.path().join("message.txt");

        Media::from_image(prepare_carrier(24, 24))
            .save_as(carrier_path.as_path())
            .expect("Failed to save carrier image");

        crate::api::hide::prepare()
            .with_image(&carrier_path)
            .with_message("Hello World")
            .with_output(&stego_path)
            .execute()
            .expect("Failed to hide message in image");

        let unveiled = crate::api::unveil::prepare()
            .from_secret_file(&stego_path)
            .into_output_file(&message_path)
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(unveiled, "Hello World");
        let secret_message = read_to_string(
            std::fs::File::open(message_path).expect("Failed to open file"),
        )
        .expect("Failed to read file");
        assert_eq!(secret_message, "Hello World");
    }
}
