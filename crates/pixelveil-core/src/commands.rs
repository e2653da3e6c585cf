use std::path::Path;

use crate::result::Result;

/// Hides `message` in the carrier image at `image` and writes the stego
/// image to `output`.
pub fn hide(image: &Path, output: &Path, message: &str) -> Result<()> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_message(message)
        .with_output(output)
        .execute()
}

/// Recovers the message hidden in `secret_media`, optionally writing it to
/// `output` as well.
pub fn unveil(secret_media: &Path, output: Option<&Path>) -> Result<String> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_file(output)
        .execute()
}
