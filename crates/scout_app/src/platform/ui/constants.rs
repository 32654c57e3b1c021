/// Shown when the form is ready for a new URL.
pub const PROMPT: &str = "> ";
/// OSC 8 hyperlink opener; the URL follows, then `OSC8_END`.
pub const OSC8_START: &str = "\x1b]8;;";
pub const OSC8_END: &str = "\x1b\\";
pub const BUSY_NOTICE: &str = "Still scraping; wait for the current request to finish.";
