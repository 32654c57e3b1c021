use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_query(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The trigger is disabled while a request is in flight.
            if state.request().is_loading() {
                return (state, Vec::new());
            }
            let request_id = state.begin_request();
            vec![Effect::SubmitScrape {
                request_id,
                page_url: state.query().to_owned(),
            }]
        }
        Msg::ScrapeCompleted {
            request_id,
            outcome,
        } => {
            state.complete_request(request_id, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
