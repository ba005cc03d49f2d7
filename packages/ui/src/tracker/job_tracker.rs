//! Top-level job tracker page.

use api::{ClientConfig, HttpJobsClient};
use dioxus::prelude::*;
use tracker_core::RefetchToken;

use super::{CreateJobForm, JobList, Notifier, Toasts};

fn connect() -> Result<HttpJobsClient, String> {
    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid jobs client config, using defaults");
        ClientConfig::default()
    });
    HttpJobsClient::new(config).map_err(|e| e.to_string())
}

/// The whole app: create form, job list, detail modal and toasts.
#[component]
pub fn JobTracker() -> Element {
    let connection = use_hook(connect);
    use_context_provider(Notifier::new);

    rsx! {
        div { class: "job-tracker",
            header { class: "tracker-header",
                h1 { "Job Tracker" }
            }

            {match connection {
                Ok(client) => rsx! {
                    TrackerBody { client }
                },
                Err(err) => rsx! {
                    div { class: "error-banner",
                        span { "Cannot reach the jobs service: {err}" }
                    }
                },
            }}

            Toasts {}
        }
    }
}

/// Everything below the header, once a client exists.
#[component]
fn TrackerBody(client: HttpJobsClient) -> Element {
    use_context_provider(|| client.clone());
    let mut refetch = use_signal(RefetchToken::default);

    rsx! {
        div { class: "tracker-content",
            aside { class: "tracker-sidebar",
                CreateJobForm {
                    on_created: move |_| refetch.write().bump(),
                }
            }
            main { class: "tracker-main",
                JobList { refetch }
            }
        }
    }
}
