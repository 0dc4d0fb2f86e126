use crate::model::download::StoryDownload;

/// What the user currently sees in the two output panels.
/// Lives in memory for one run of the app and is never written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResult {
    pub interpretation: String,
    pub story: String,
}

impl SessionResult {
    pub fn has_story(&self) -> bool {
        !self.story.is_empty()
    }

    pub fn download(&self) -> Option<StoryDownload> {
        if self.has_story() {
            Some(StoryDownload::from_story(&self.story))
        } else {
            None
        }
    }
}
