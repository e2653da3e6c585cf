use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::message::Message;
use crate::{Persist, PixelveilError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// This is the carrier image the message will be hidden in, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The resulting stego image will be written here, always as PNG
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(message) = self.message else {
            return Err(PixelveilError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };

        let message = Message::new(&message)?;
        let mut media = Media::from_file(&image)?;
        media.hide_message(&message)?.save_as(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_a_message() {
        let result = prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .execute();

        match result.err() {
            Some(PixelveilError::MissingMessage) => (),
            e => panic!("Expected MissingMessage, got {e:?}"),
        }
    }

    #[test]
    fn should_require_a_carrier() {
        let result = prepare()
            .with_message("hello")
            .with_output("out.png")
            .execute();

        match result.err() {
            Some(PixelveilError::CarrierNotSet) => (),
            e => panic!("Expected CarrierNotSet, got {e:?}"),
        }
    }

    #[test]
    fn should_require_an_output() {
        let result = prepare()
            .with_message("hello")
            .with_image("carrier.png")
            .execute();

        match result.err() {
            Some(PixelveilError::TargetNotSet) => (),
            e => panic!("Expected TargetNotSet, got {e:?}"),
        }
    }
}
