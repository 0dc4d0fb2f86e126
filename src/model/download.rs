use std::fs;
use std::io;
use std::path::Path;

pub const STORY_FILE_NAME: &str = "dreamwalker_story.txt";
pub const STORY_MIME: &str = "text/plain";

/// The story as a plain-text file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDownload {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl StoryDownload {
    pub fn from_story(story: &str) -> Self {
        Self {
            file_name: STORY_FILE_NAME,
            mime: STORY_MIME,
            bytes: story.as_bytes().to_vec(),
        }
    }

    /// Label and extension for a save dialog filter.
    pub fn file_filter(&self) -> (&'static str, &'static str) {
        let extension = self.file_name.rsplit_once('.').map_or("", |(_, ext)| ext);
        (self.mime, extension)
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::session::SessionResult;

    #[test]
    fn no_download_without_story() {
        let session = SessionResult {
            interpretation: "Emotions: fear".into(),
            story: String::new(),
        };
        assert!(session.download().is_none());
    }

    #[test]
    fn download_is_utf8_plain_text() {
        let session = SessionResult {
            interpretation: String::new(),
            story: "The city gleamed — ✨".into(),
        };
        let dl = session.download().unwrap();
        assert_eq!(dl.file_name, "dreamwalker_story.txt");
        assert_eq!(dl.mime, "text/plain");
        assert_eq!(dl.bytes, "The city gleamed — ✨".as_bytes());
    }

    #[test]
    fn save_filter_is_plain_text() {
        let dl = StoryDownload::from_story("x");
        assert_eq!(dl.file_filter(), ("text/plain", "txt"));
    }

    #[test]
    fn writes_bytes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORY_FILE_NAME);

        StoryDownload::from_story("Once upon a dream.")
            .write_to(&path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Once upon a dream.");
    }
}
