//! External link rendering.
//!
//! An [`ExternalLink`] renders as a new-tab anchor with `noopener` and
//! `noreferrer` when its href normalizes to a safe URL, and as an inert
//! `<span>` carrying the same children and class otherwise.

mod table;

pub use table::project_table;

use maud::{html, Markup, Render};

use crate::url_model::{normalize_with_policy, SchemePolicy};

/// `rel` value that cuts both the opener reference and the referrer.
pub const SAFE_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone)]
pub struct ExternalLink<'a> {
    href: &'a str,
    children: Markup,
    class: Option<&'a str>,
    title: Option<&'a str>,
    policy: SchemePolicy,
}

impl<'a> ExternalLink<'a> {
    pub fn new(href: &'a str, children: impl Render) -> Self {
        Self {
            href,
            children: children.render(),
            class: None,
            title: None,
            policy: SchemePolicy::default(),
        }
    }

    pub fn class(mut self, class: Option<&'a str>) -> Self {
        self.class = class;
        self
    }

    /// Explicit title. Safe links fall back to the normalized URL.
    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title;
        self
    }

    pub fn policy(mut self, policy: SchemePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Render for ExternalLink<'_> {
    fn render(&self) -> Markup {
        let safe = normalize_with_policy(self.href, self.policy);
        if safe.is_empty() {
            return html! {
                span class=[self.class] title=[self.title] { (self.children) }
            };
        }
        let title = self.title.unwrap_or(safe.as_str());
        html! {
            a href=(safe) target="_blank" rel=(SAFE_REL) class=[self.class] title=(title) {
                (self.children)
            }
        }
    }
}

/// Renders `children` as an external link to `href` with the default policy.
pub fn external_link(
    href: &str,
    children: impl Render,
    class: Option<&str>,
    title: Option<&str>,
) -> Markup {
    ExternalLink::new(href, children)
        .class(class)
        .title(title)
        .render()
}
