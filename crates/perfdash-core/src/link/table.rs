//! Project performance table fragment.

use maud::{html, Markup};

use super::ExternalLink;
use crate::payload::PerformancePayload;
use crate::url_model::SchemePolicy;

/// Renders the payload's projects as a `<table>` fragment.
///
/// Project names link to their homepage; a missing or rejected homepage
/// leaves the name as inert text.
pub fn project_table(
    payload: &PerformancePayload,
    policy: SchemePolicy,
    link_class: Option<&str>,
) -> Markup {
    html! {
        table class="project-table" data-period=(payload.period) {
            thead {
                tr {
                    th { "Project" }
                    th { "Owner" }
                    th { "Score" }
                    th { "Tasks" }
                    th { "Completion" }
                }
            }
            tbody {
                @for project in &payload.projects {
                    tr {
                        td {
                            (ExternalLink::new(project.homepage.as_deref().unwrap_or_default(), project.name.as_str())
                                .class(link_class)
                                .policy(policy))
                        }
                        td { (project.owner.as_deref().unwrap_or("-")) }
                        td { (format!("{:.1}", project.score)) }
                        td { (project.tasks_completed) "/" (project.tasks_total) }
                        td { (format!("{:.0}%", project.completion_ratio() * 100.0)) }
                    }
                }
            }
        }
    }
}
