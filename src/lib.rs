//! Search, filter and pagination state for the property and message listing
//! pages, kept in sync with the address bar and the listing REST API.

pub mod codec;
pub mod controller;
pub mod credentials;
pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod forms;
pub mod history;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "client")]
pub mod models;
pub mod pagination;

#[cfg(feature = "client")]
pub use client::run;

#[cfg(feature = "client")]
mod client {
    use crate::controller::{SearchState, SearchStateController};
    use crate::credentials::StaticCredentials;
    use crate::domain::message::Message;
    use crate::domain::property::Property;
    use crate::domain::resource::{self, ListingResource, MESSAGES};
    use crate::fetcher::http::HttpListingFetcher;
    use crate::forms::message::MessageFilterForm;
    use crate::forms::property::PropertyFilterForm;
    use crate::history::{History, Location, MemoryHistory};
    use crate::models::config::ClientConfig;

    /// Opens a listing page at `query`, optionally submits its filter form
    /// with `filter_form` (a form-encoded body) and prints the result.
    pub fn run(
        config: ClientConfig,
        path: &str,
        query: &str,
        filter_form: Option<&str>,
    ) -> std::io::Result<()> {
        let resource = resource::by_path(path)
            .ok_or_else(|| std::io::Error::other(format!("Unknown listing `{path}`")))?;

        let fetcher = HttpListingFetcher::from_config(&config)
            .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

        let history = MemoryHistory::starting_at(Location::new(
            resource.route(),
            query.trim().trim_start_matches('?'),
        ));
        let credentials = StaticCredentials::from(config.access_token.clone());

        let mut controller = SearchStateController::new(resource, query, &history, credentials);
        let ticket = controller.start();
        controller.run(&ticket, &fetcher);

        if let Some(body) = filter_form {
            let update = if resource == &MESSAGES {
                serde_html_form::from_str::<MessageFilterForm>(body)
                    .map_err(|e| std::io::Error::other(format!("Invalid filter form: {e}")))?
                    .into_update()
            } else {
                serde_html_form::from_str::<PropertyFilterForm>(body)
                    .map_err(|e| std::io::Error::other(format!("Invalid filter form: {e}")))?
                    .into_update(config.user_id.as_deref())
            }
            .map_err(|e| std::io::Error::other(format!("Invalid filters: {e}")))?;

            let ticket = controller
                .set_filters(&update)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            controller.run(&ticket, &fetcher);
        }

        print_listing(resource, &controller);
        Ok(())
    }

    fn print_listing<H, C>(resource: &ListingResource, controller: &SearchStateController<H, C>)
    where
        H: History,
        C: crate::credentials::CredentialProvider,
    {
        println!("{}", controller.location());

        if let Some(alert) = controller.alert() {
            println!("{}", alert.message);
        }
        if controller.state() == SearchState::Error {
            return;
        }

        let pagination = controller.pagination();
        println!(
            "{} (page {} of {}, {} per page)",
            pagination.summary,
            pagination.page,
            pagination.total_pages,
            pagination.page_size
        );

        if controller.is_past_end() {
            println!("No {} on this page.", resource.noun);
            return;
        }

        let lines = if resource == &MESSAGES {
            controller.items_as::<Message>().map(|messages| {
                messages
                    .iter()
                    .map(|m| format!("[{}] {}: {}", m.status.label(), m.sender_email, m.body))
                    .collect::<Vec<_>>()
            })
        } else {
            controller.items_as::<Property>().map(|properties| {
                properties
                    .iter()
                    .map(|p| {
                        format!(
                            "{} | {} | £{} | {}{}",
                            p.title,
                            p.type_label(),
                            p.price,
                            p.location.town.as_deref().unwrap_or("-"),
                            if p.is_under_offer() { " | under offer" } else { "" }
                        )
                    })
                    .collect::<Vec<_>>()
            })
        };

        match lines {
            Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
            Err(err) => log::error!("Failed to read {} records: {err}", resource.noun),
        }
    }
}
