//! Terminal stand-in for the page: form values come from flags, region
//! changes go to the log, and the results region is kept for writing out.

use client_core::{FormInput, Region, ScrollBlock, SubmitEvent, UiPorts};
use tracing::{debug, info};

pub struct TerminalUi {
    form: FormInput,
    results_html: String,
    results_visible: bool,
    error_text: String,
    error_visible: bool,
}

impl TerminalUi {
    pub fn new(form: FormInput) -> Self {
        Self {
            form,
            results_html: String::new(),
            results_visible: false,
            error_text: String::new(),
            error_visible: false,
        }
    }

    /// The results HTML, only while the results region is shown.
    pub fn visible_results(&self) -> Option<&str> {
        self.results_visible.then_some(self.results_html.as_str())
    }

    pub fn visible_error(&self) -> Option<&str> {
        self.error_visible.then_some(self.error_text.as_str())
    }
}

impl UiPorts for TerminalUi {
    fn read_form(&self) -> FormInput {
        self.form.clone()
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        debug!(enabled, "submit control");
    }

    fn set_loading_indicator(&mut self, visible: bool) {
        if visible {
            info!("generating route...");
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        debug!(?region, visible, "region visibility");
        match region {
            Region::Results => self.results_visible = visible,
            Region::Error => self.error_visible = visible,
        }
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn set_results_html(&mut self, html: &str) {
        self.results_html = html.to_string();
    }

    fn scroll_into_view(&mut self, region: Region, block: ScrollBlock) {
        debug!(?region, ?block, "scroll into view");
    }
}

/// A submit with no browser default to suppress.
pub struct CliSubmit;

impl SubmitEvent for CliSubmit {
    fn prevent_default(&mut self) {}
}
