use bytes::Bytes;

/// A file part taken from a multipart upload, fully buffered.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Original client-supplied filename
    pub filename: String,
    /// MIME type as declared by the client; never validated
    pub content_type: String,
    pub data: Bytes,
}

impl FilePart {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }
}

/// Descriptive text fields of an upload. Absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

/// Output of the multipart decoder: the two optional file slots plus text fields.
#[derive(Debug, Clone, Default)]
pub struct DecodedUpload {
    pub image: Option<FilePart>,
    pub song: Option<FilePart>,
    pub fields: UploadFields,
}
