mod store;

pub use store::{Feedback, FeedbackError, FeedbackStore, NewFeedback};
