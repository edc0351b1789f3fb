use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Maps an English message id to the sentence template of the active language.
pub trait Translator: Send + Sync {
    fn translate<'a>(&self, msgid: &'a str) -> Cow<'a, str>;
}

/// The source language: every message id is its own translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct English;

impl Translator for English {
    fn translate<'a>(&self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// One piece of a rendered sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    Text { text: String },
    /// An interpolated value shown with emphasis.
    Strong { text: String },
    Link { href: String, text: String },
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Fragment::Strong { text: text.into() }
    }

    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Fragment::Link {
            href: href.into(),
            text: text.into(),
        }
    }

    /// The visible text, without markup.
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text { text } | Fragment::Strong { text } | Fragment::Link { text, .. } => {
                text
            }
        }
    }
}

/// A rendered sentence. `Display` yields the plain-text form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    pub fragments: Vec<Fragment>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment.as_str())?;
        }
        Ok(())
    }
}

impl Message {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Fragment::Text { text: last }) = self.fragments.last_mut() {
            last.push_str(text);
        } else {
            self.fragments.push(Fragment::text(text));
        }
    }

    fn push(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Text { text } => self.push_text(&text),
            other => self.fragments.push(other),
        }
    }
}

/// Substitute `args` into the `%s` placeholders of `template`, left to right.
///
/// `%%` is a literal percent sign. A placeholder with no argument left stays
/// in the output as `%s`; arguments without a placeholder are dropped.
/// Adjacent text is merged into a single fragment.
pub fn interpolate(template: &str, args: impl IntoIterator<Item = Fragment>) -> Message {
    let mut args = args.into_iter();
    let mut message = Message::default();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        message.push_text(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(tail) = after.strip_prefix('s') {
            match args.next() {
                Some(arg) => message.push(arg),
                None => message.push_text("%s"),
            }
            rest = tail;
        } else if let Some(tail) = after.strip_prefix('%') {
            message.push_text("%");
            rest = tail;
        } else {
            message.push_text("%");
            rest = after;
        }
    }
    message.push_text(rest);
    message
}
