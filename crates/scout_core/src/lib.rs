//! MP3 scout core: pure form state machine and view-model helpers.
mod effect;
mod link;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use link::{filename_from_url, LinkLifetime, Mp3Link, TEMPORARY_SUFFIX};
pub use msg::{Msg, ScrapeOutcome};
pub use state::{FormState, RequestId, RequestState, ScrapeFailure};
pub use update::update;
pub use view_model::{
    FormViewModel, LinkRowView, INPUT_PLACEHOLDER, SUBMIT_LABEL_IDLE, SUBMIT_LABEL_LOADING, TITLE,
};
