//! Submission controller: one form submit, one exchange, one render or error.

use shared::error::display_error;
use tracing::{debug, error};

use crate::{
    protocol_client::RouteClient, render::render_route, transport::RouteTransport,
    types::FormInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Results,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

/// Page elements the controller owns. It is the only writer to them.
pub trait UiPorts {
    fn read_form(&self) -> FormInput;
    fn set_submit_enabled(&mut self, enabled: bool);
    /// Swaps the submit label for the loading indicator and back.
    fn set_loading_indicator(&mut self, visible: bool);
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_error_text(&mut self, text: &str);
    fn set_results_html(&mut self, html: &str);
    fn scroll_into_view(&mut self, region: Region, block: ScrollBlock);
}

pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered { place_count: usize },
    Failed { message: String },
}

pub struct SubmissionController<T: RouteTransport, U: UiPorts> {
    client: RouteClient<T>,
    ui: U,
    loading: bool,
}

impl<T: RouteTransport, U: UiPorts> SubmissionController<T, U> {
    pub fn new(client: RouteClient<T>, ui: U) -> Self {
        Self {
            client,
            ui,
            loading: false,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn on_submit(&mut self, event: &mut dyn SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        self.ui.set_visible(Region::Error, false);
        self.ui.set_visible(Region::Results, false);
        self.set_loading(true);

        let request = self.ui.read_form().to_request();
        let outcome = match self.client.generate_route(&request).await {
            Ok(route) => {
                let html = render_route(&route);
                self.ui.set_results_html(&html);
                self.ui.set_visible(Region::Results, true);
                self.ui.scroll_into_view(Region::Results, ScrollBlock::Start);
                let place_count = route.places().len();
                debug!(place_count, "route rendered");
                SubmitOutcome::Rendered { place_count }
            }
            Err(err) => {
                error!(%err, "route generation failed");
                let message = display_error(err.user_message());
                self.show_error(&message);
                SubmitOutcome::Failed { message }
            }
        };

        self.set_loading(false);
        outcome
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.ui.set_submit_enabled(!loading);
        self.ui.set_loading_indicator(loading);
    }

    fn show_error(&mut self, message: &str) {
        self.ui.set_error_text(message);
        self.ui.set_visible(Region::Error, true);
        self.ui.scroll_into_view(Region::Error, ScrollBlock::Center);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
