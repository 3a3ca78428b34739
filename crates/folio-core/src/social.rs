//! Placeholder social links: a click shows a notice instead of navigating.

use std::fmt;

use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialLink {
    Instagram,
    Facebook,
}

impl SocialLink {
    pub fn all() -> &'static [SocialLink] {
        &[SocialLink::Instagram, SocialLink::Facebook]
    }

    pub fn placeholder_message(&self) -> &'static str {
        match self {
            SocialLink::Instagram => "Instagram link would open here. Follow me at @yrean!",
            SocialLink::Facebook => "Facebook link would open here. Connect with me on Facebook!",
        }
    }

    /// Element id used by the default markup.
    pub fn default_id(&self) -> &'static str {
        match self {
            SocialLink::Instagram => "instagram-btn",
            SocialLink::Facebook => "facebook-btn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialLink::Instagram => "Instagram",
            SocialLink::Facebook => "Facebook",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            SocialLink::Instagram => "fab fa-instagram",
            SocialLink::Facebook => "fab fa-facebook",
        }
    }

    /// Sends the placeholder notice.
    pub fn activate<N: Notifier + ?Sized>(&self, notifier: &mut N) {
        tracing::debug!(link = %self, "Social placeholder clicked");
        notifier.notify(self.placeholder_message());
    }
}

impl fmt::Display for SocialLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
