//! Test fixtures: small image/audio blobs and upload forms.

use axum_test::multipart::{MultipartForm, Part};

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\"></div></body></html>";

/// JPEG SOI/APP0 marker bytes; enough to be recognisably binary.
pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01]
}

/// ID3 header followed by non-UTF-8 bytes.
pub fn mp3_bytes() -> Vec<u8> {
    let mut data = b"ID3\x03\x00\x00\x00\x00\x00\x00".to_vec();
    data.extend_from_slice(&[0x00, 0x9F, 0x92, 0x96, 0xFF, 0xFB, 0x90, 0x64]);
    data
}

pub fn image_part(data: Vec<u8>) -> Part {
    Part::bytes(data).file_name("img1.jpg").mime_type("image/jpeg")
}

pub fn song_part(data: Vec<u8>) -> Part {
    Part::bytes(data).file_name("track1.mp3").mime_type("audio/mpeg")
}

/// The upload from the happy-path scenario: both files plus all text fields.
pub fn full_upload_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("title", "Sunset")
        .add_text("description", "beach photo")
        .add_text("artist", "Jane")
        .add_text("album", "Demo")
        .add_part("image", image_part(jpeg_bytes()))
        .add_part("song", song_part(mp3_bytes()))
}
