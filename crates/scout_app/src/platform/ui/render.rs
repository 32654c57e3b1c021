use scout_core::{FormViewModel, LinkRowView};

use super::constants::{OSC8_END, OSC8_START};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit OSC 8 escape sequences so terminals can open links directly.
    pub hyperlinks: bool,
}

pub fn render(view: &FormViewModel, options: RenderOptions) -> Vec<String> {
    if view.loading {
        return vec![format!("{} {}", view.submit_label, view.query)];
    }

    let mut lines = Vec::new();
    if let Some(error) = &view.error {
        lines.push(error.clone());
    }
    if !view.links.is_empty() {
        lines.push(format!("Found {} MP3 link(s):", view.links.len()));
        for (index, row) in view.links.iter().enumerate() {
            lines.push(format!("{:>3}. {}", index + 1, format_link(row, options)));
        }
    }
    lines
}

fn format_link(row: &LinkRowView, options: RenderOptions) -> String {
    if options.hyperlinks {
        format!(
            "{OSC8_START}{href}{OSC8_END}{label}{OSC8_START}{OSC8_END}",
            href = row.href,
            label = row.label
        )
    } else {
        format!("{} <{}>", row.label, row.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scout_core::{update, FormState, LinkLifetime, Mp3Link, Msg, ScrapeOutcome};

    const PLAIN: RenderOptions = RenderOptions { hyperlinks: false };

    fn view_after(outcome: ScrapeOutcome) -> FormViewModel {
        let (state, _) = update(
            FormState::new(),
            Msg::InputChanged("https://example.com/page".to_string()),
        );
        let (state, _) = update(state, Msg::SubmitClicked);
        let (state, _) = update(
            state,
            Msg::ScrapeCompleted {
                request_id: 1,
                outcome,
            },
        );
        state.view()
    }

    #[test]
    fn loading_shows_busy_label() {
        let (state, _) = update(
            FormState::new(),
            Msg::InputChanged("https://example.com/page".to_string()),
        );
        let (state, _) = update(state, Msg::SubmitClicked);

        assert_eq!(
            render(&state.view(), PLAIN),
            vec!["Scraping... https://example.com/page".to_string()]
        );
    }

    #[test]
    fn links_are_numbered_in_order() {
        let view = view_after(ScrapeOutcome::Links(vec![
            Mp3Link::plain("https://example.com/audio/track.mp3"),
            Mp3Link::tagged("https://x/a.mp3", LinkLifetime::Temporary),
        ]));

        assert_eq!(
            render(&view, PLAIN),
            vec![
                "Found 2 MP3 link(s):".to_string(),
                "  1. track.mp3 <https://example.com/audio/track.mp3>".to_string(),
                "  2. a.mp3 (Temporary) <https://x/a.mp3>".to_string(),
            ]
        );
    }

    #[test]
    fn hyperlinks_wrap_label_in_osc8() {
        let view = view_after(ScrapeOutcome::Links(vec![Mp3Link::plain("https://x/a.mp3")]));
        let lines = render(&view, RenderOptions { hyperlinks: true });

        assert_eq!(
            lines[1],
            "  1. \x1b]8;;https://x/a.mp3\x1b\\a.mp3\x1b]8;;\x1b\\".to_string()
        );
    }

    #[test]
    fn errors_render_without_links() {
        assert_eq!(
            render(&view_after(ScrapeOutcome::Failed), PLAIN),
            vec!["Error fetching MP3 links.".to_string()]
        );
        assert_eq!(
            render(&view_after(ScrapeOutcome::Links(Vec::new())), PLAIN),
            vec!["No MP3 files found.".to_string()]
        );
    }
}
