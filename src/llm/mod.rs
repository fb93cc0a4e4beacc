mod story_client;

pub use story_client::{StoryClient, StoryError, StoryRequest, SyllableRange};
