//! `perfdash link <href>` – render an external link.

use anyhow::Result;
use maud::Render;
use perfdash_core::link::ExternalLink;
use perfdash_core::url_model::SchemePolicy;

#[derive(Debug)]
pub struct LinkArgs {
    pub href: String,
    pub text: Option<String>,
    pub class: Option<String>,
    pub title: Option<String>,
    pub policy: SchemePolicy,
}

pub fn render_link(args: &LinkArgs) -> String {
    let text = args.text.as_deref().unwrap_or(&args.href);
    ExternalLink::new(&args.href, text)
        .class(args.class.as_deref())
        .title(args.title.as_deref())
        .policy(args.policy)
        .render()
        .into_string()
}

pub fn run_link(args: &LinkArgs) -> Result<()> {
    println!("{}", render_link(args));
    Ok(())
}
