// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction of the uploaded image from a multipart form

use axum_extra::extract::multipart::{Multipart, MultipartError};
use bytes::Bytes;

/// Multipart field carrying the image
pub const IMAGE_FIELD: &str = "image_file";

/// An uploaded image, owned by the request
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    /// Declared MIME type of the part
    pub content_type: String,
    pub file_name: String,
}

impl ImageUpload {
    /// Read the `image_file` file part from the form.
    ///
    /// Only parts carrying a filename count, and the last one wins. A part
    /// without a content type is kept with an empty type so the caller can
    /// reject it. Returns `Ok(None)` when no such part exists.
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Option<Self>, MultipartError> {
        let mut upload = None;

        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(IMAGE_FIELD) {
                continue;
            }

            let Some(file_name) = field.file_name().map(str::to_string) else {
                continue;
            };
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;

            upload = Some(Self {
                bytes,
                content_type,
                file_name,
            });
        }

        Ok(upload)
    }

    pub fn is_image(&self) -> bool {
        is_image_content_type(&self.content_type)
    }
}

/// `true` when the declared MIME type starts with `image/`
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
