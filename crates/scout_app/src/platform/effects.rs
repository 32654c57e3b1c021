use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_core::{Effect, LinkLifetime, Mp3Link, Msg, ScrapeOutcome};
use scout_engine::{EngineEvent, EngineHandle, LinkType, ScrapeError, ScrapedLink};
use scout_logging::{scout_info, scout_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, events: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self {
            engine: Arc::new(engine),
        };
        runner.spawn_event_loop(events);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitScrape {
                    request_id,
                    page_url,
                } => {
                    scout_info!(
                        "SubmitScrape request_id={} url_len={} url={}",
                        request_id,
                        page_url.len(),
                        page_url
                    );
                    self.engine.submit(request_id, page_url);
                }
            }
        }
    }

    fn spawn_event_loop(&self, events: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::ScrapeCompleted { request_id, result } => Msg::ScrapeCompleted {
                        request_id,
                        outcome: map_result(request_id, result),
                    },
                };
                if events.send(AppEvent::Core(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_result(request_id: u64, result: Result<Vec<ScrapedLink>, ScrapeError>) -> ScrapeOutcome {
    match result {
        Ok(links) => {
            scout_info!("Request {} returned {} link(s)", request_id, links.len());
            ScrapeOutcome::Links(links.into_iter().map(map_link).collect())
        }
        Err(err) => {
            scout_warn!("Request {} failed: {}", request_id, err);
            ScrapeOutcome::Failed
        }
    }
}

fn map_link(link: ScrapedLink) -> Mp3Link {
    match link {
        ScrapedLink::Url(url) => Mp3Link::Plain(url),
        ScrapedLink::Entry { url, kind } => Mp3Link::Tagged {
            url,
            lifetime: match kind {
                LinkType::Temporary => LinkLifetime::Temporary,
                LinkType::Permanent | LinkType::Other => LinkLifetime::Permanent,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_engine::FailureKind;

    #[test]
    fn link_shapes_map_onto_core_links() {
        let outcome = map_result(
            1,
            Ok(vec![
                ScrapedLink::Url("https://x/a.mp3".to_string()),
                ScrapedLink::Entry {
                    url: "https://x/b.mp3".to_string(),
                    kind: LinkType::Temporary,
                },
                ScrapedLink::Entry {
                    url: "https://x/c.mp3".to_string(),
                    kind: LinkType::Other,
                },
            ]),
        );

        assert_eq!(
            outcome,
            ScrapeOutcome::Links(vec![
                Mp3Link::plain("https://x/a.mp3"),
                Mp3Link::tagged("https://x/b.mp3", LinkLifetime::Temporary),
                Mp3Link::tagged("https://x/c.mp3", LinkLifetime::Permanent),
            ])
        );
    }

    #[test]
    fn every_engine_failure_collapses_to_failed() {
        let kinds = [
            FailureKind::HttpStatus(404),
            FailureKind::Timeout,
            FailureKind::Decode,
            FailureKind::Network,
        ];
        for kind in kinds {
            let err = ScrapeError {
                kind,
                message: "boom".to_string(),
            };
            assert_eq!(map_result(3, Err(err)), ScrapeOutcome::Failed);
        }
    }
}
