//! `Ratify` - desktop review queue for inferred message classifications.
//!
//! Built with Rust and the iced GUI framework on top of `ratify-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::sync::Arc;
use std::time::Duration;

use iced::keyboard::{self, Key};
use iced::widget::column;
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ratify_core::{
    ConfirmationRequest, HttpReviewApi, MessageId, QueueStore, ResolutionController,
    ResolutionError, ReviewApi, ReviewConfig, UnverifiedItem,
};

use message::{CorrectionMessage, KeyboardAction, Message};
use model::CorrectionState;
use style::widgets::{page_style, palette};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ratify=debug,ratify_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Ratify");

    iced::application(Ratify::new, Ratify::update, Ratify::view)
        .title("Ratify")
        .subscription(Ratify::subscription)
        .run()
}

/// Main application state.
#[derive(Default)]
struct Ratify {
    /// Active configuration.
    config: ReviewConfig,
    /// Review service client, `None` until config is loaded or if the URL is bad.
    api: Option<Arc<dyn ReviewApi>>,
    /// Queue snapshot and its projections.
    store: QueueStore,
    /// Decision bookkeeping.
    controller: ResolutionController,
    /// Correction dialog form.
    correction: CorrectionState,
    /// Startup problem shown in the header.
    notice: Option<String>,
}

impl Ratify {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();
        palette::set_theme(app.config.theme);
        // Shows "Loading messages..." until the first snapshot arrives
        app.store.begin_load();
        (app, Task::perform(load_config(), Message::ConfigLoaded))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(result) => return self.on_config_loaded(result),
            Message::QueueLoaded(result) => {
                self.store.finish_load(result);
                // A new snapshot invalidates any open dialog
                self.controller.cancel_correction();
                self.correction.reset();
            }
            Message::ToggleExpand(id) => {
                self.store.toggle_expand(&id);
            }
            Message::Accept(id) => match self.controller.accept(&self.store, &id) {
                Ok(request) => return self.send(request),
                Err(e) => debug!(%id, error = %e, "Accept ignored"),
            },
            Message::RequestCorrection(id) => {
                match self.controller.request_correction(&self.store, &id) {
                    Ok(_) => self.correction.open(&id),
                    Err(e) => debug!(%id, error = %e, "Correction request ignored"),
                }
            }
            Message::Correction(msg) => return self.on_correction(msg),
            Message::Confirmed { request, result } => {
                let next = self
                    .controller
                    .finish_confirmation(&mut self.store, &request, result);
                return self.schedule_removal(next);
            }
            Message::RemovalSettled(id) => {
                let next = self.controller.finish_removal(&mut self.store, &id);
                return self.schedule_removal(next);
            }
            Message::KeyPressed(KeyboardAction::Cancel) => {
                if self.controller.cancel_correction().is_some() {
                    self.correction.reset();
                }
            }
            Message::KeyIgnored => {}
        }
        Task::none()
    }

    fn on_config_loaded(&mut self, result: Result<ReviewConfig, String>) -> Task<Message> {
        self.config = result.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using defaults");
            self.notice = Some(format!("Config not loaded: {e}"));
            ReviewConfig::default()
        });
        palette::set_theme(self.config.theme);
        info!(
            api = %self.config.api_base_url,
            settle_delay_ms = self.config.settle_delay_ms,
            "Configuration ready"
        );

        match HttpReviewApi::new(&self.config.api_base_url) {
            Ok(api) => {
                let api: Arc<dyn ReviewApi> = Arc::new(api);
                self.api = Some(Arc::clone(&api));
                self.store.begin_load();
                Task::perform(fetch_queue(api), Message::QueueLoaded)
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                self.store.finish_load(Err(e));
                Task::none()
            }
        }
    }

    fn on_correction(&mut self, msg: CorrectionMessage) -> Task<Message> {
        match msg {
            CorrectionMessage::LabelChanged(input) => self.correction.set_input(input),
            CorrectionMessage::Cancel => {
                self.controller.cancel_correction();
                self.correction.reset();
            }
            CorrectionMessage::Confirm => {
                match self
                    .controller
                    .confirm_correction(&self.store, &self.correction.input)
                {
                    Ok(request) => {
                        self.correction.reset();
                        return self.send(request);
                    }
                    Err(e @ ResolutionError::BlankLabel) => self.correction.reject(&e),
                    Err(e) => {
                        debug!(error = %e, "Correction not sent");
                        self.correction.reset();
                    }
                }
            }
        }
        Task::none()
    }

    /// Send a confirmation in the background.
    fn send(&self, request: ConfirmationRequest) -> Task<Message> {
        let Some(api) = self.api.clone() else {
            // No client means the load failed and the queue is empty
            warn!(id = %request.id, "No review service configured");
            return Task::done(Message::Confirmed {
                request,
                result: Err("review service not configured".to_string()),
            });
        };
        Task::perform(send_confirmation(api, request), |(request, result)| {
            Message::Confirmed { request, result }
        })
    }

    /// Wait out the settle delay for the item now in the removal slot.
    fn schedule_removal(&self, removing: Option<MessageId>) -> Task<Message> {
        removing.map_or_else(Task::none, |id| {
            Task::perform(settle(self.config.settle_delay()), move |()| {
                Message::RemovalSettled(id)
            })
        })
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let page = column![
            view::view_header(self.store.status(), self.notice.as_deref()),
            view::view_queue(&self.store, &self.controller),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let page: Element<'_, Message> = iced::widget::container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(page_style)
            .into();

        match self.controller.selection() {
            Some(selection) => view::view_correction_dialog(page, selection, &self.correction),
            None => page,
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, .. } = event {
                handle_key_press(&key).unwrap_or(Message::KeyIgnored)
            } else {
                Message::KeyIgnored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key) -> Option<Message> {
    match key {
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        _ => None,
    }
}

/// Load configuration from file and environment.
async fn load_config() -> Result<ReviewConfig, String> {
    ReviewConfig::load().await.map_err(|e| e.to_string())
}

/// Fetch the current queue snapshot.
async fn fetch_queue(api: Arc<dyn ReviewApi>) -> Result<Vec<UnverifiedItem>, String> {
    api.fetch_unverified_queue()
        .await
        .map_err(|e| e.to_string())
}

/// Send one confirmation and hand the request back with its answer.
async fn send_confirmation(
    api: Arc<dyn ReviewApi>,
    request: ConfirmationRequest,
) -> (ConfirmationRequest, Result<(), String>) {
    let result = ratify_core::confirm(api.as_ref(), &request)
        .await
        .map_err(|e| e.to_string());
    (request, result)
}

async fn settle(delay: Duration) {
    tokio::time::sleep(delay).await;
}
