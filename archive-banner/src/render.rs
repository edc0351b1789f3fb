use crate::format::{EnglishFormatter, Formatter};
use crate::template::{interpolate, English, Fragment, Message, Translator};
use archive_reason::Reason;

pub const DEFAULT_DOCS_URL: &str = "https://docs.sentry.io/product/issues/states-triage/";

const ESCALATING: &str =
    "This issue has been archived. It'll return to your inbox if it escalates. To learn more, %s";
const READ_THE_DOCS: &str = "read the docs";
const UNTIL_DATE: &str = "This issue has been archived until %s.";
const COUNT_IN_WINDOW: &str = "This issue has been archived until it occurs %s time(s) in %s.";
const COUNT_ONLY: &str = "This issue has been archived until it occurs %s more time(s).";
const USER_COUNT_IN_WINDOW: &str = "This issue has been archived until it affects %s user(s) in %s.";
const USER_COUNT_ONLY: &str = "This issue has been archived until it affects %s more user(s).";
const FOREVER: &str = "This issue has been archived forever.";

/// Renders the archived-issue banner sentence for a [`Reason`].
#[derive(Clone, Debug)]
pub struct BannerRenderer<F = EnglishFormatter, T = English> {
    formatter: F,
    translator: T,
    docs_url: String,
}

impl BannerRenderer {
    /// English sentences, dates in UTC on a 12-hour clock.
    pub fn english() -> Self {
        Self::new(EnglishFormatter::default(), English)
    }
}

impl Default for BannerRenderer {
    fn default() -> Self {
        Self::english()
    }
}

impl<F: Formatter, T: Translator> BannerRenderer<F, T> {
    pub fn new(formatter: F, translator: T) -> Self {
        Self {
            formatter,
            translator,
            docs_url: DEFAULT_DOCS_URL.into(),
        }
    }

    /// Target of the link in the escalating sentence.
    pub fn with_docs_url(mut self, docs_url: impl Into<String>) -> Self {
        self.docs_url = docs_url.into();
        self
    }

    pub fn docs_url(&self) -> &str {
        &self.docs_url
    }

    pub fn render(&self, reason: &Reason) -> Message {
        match reason {
            Reason::Escalating => self.sentence(
                ESCALATING,
                [Fragment::link(
                    self.docs_url.clone(),
                    self.translator.translate(READ_THE_DOCS),
                )],
            ),
            Reason::UntilDate { until } => self.sentence(
                UNTIL_DATE,
                [Fragment::strong(self.formatter.format_date(until))],
            ),
            Reason::CountInWindow {
                count,
                window_seconds,
            } => self.sentence(
                COUNT_IN_WINDOW,
                [self.count(*count), self.duration(*window_seconds)],
            ),
            Reason::CountOnly { count } => self.sentence(COUNT_ONLY, [self.count(*count)]),
            Reason::UserCountInWindow {
                count,
                window_seconds,
            } => self.sentence(
                USER_COUNT_IN_WINDOW,
                [self.count(*count), self.duration(*window_seconds)],
            ),
            Reason::UserCountOnly { count } => {
                self.sentence(USER_COUNT_ONLY, [self.count(*count)])
            }
            Reason::Forever => self.sentence(FOREVER, []),
        }
    }

    fn sentence<const N: usize>(&self, msgid: &str, args: [Fragment; N]) -> Message {
        interpolate(&self.translator.translate(msgid), args)
    }

    fn count(&self, value: i64) -> Fragment {
        Fragment::strong(self.formatter.format_number(value))
    }

    fn duration(&self, seconds: i64) -> Fragment {
        Fragment::strong(self.formatter.format_duration(seconds))
    }
}
