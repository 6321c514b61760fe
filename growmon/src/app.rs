//! GrowMon Iced application.

use std::time::{Duration, Instant};

use iced::widget::column;
use iced::{Element, Subscription, Task, Theme};

use growmon_common::MonitorConfig;
use tracing::{error, info, warn};

use crate::client::DeviceClient;
use crate::message::Message;
use crate::mock::DemoFeed;
use crate::poller::{CycleAction, Poller};
use crate::view::controls::controls_view;
use crate::view::plot::{PlotState, plot_view};

/// The main GrowMon application.
pub struct GrowMon {
    /// Polling state machine (running/busy flags, address, buffer).
    poller: Poller,
    /// Plot surface state.
    plot: PlotState,
    /// HTTP client for the device endpoint.
    client: DeviceClient,
    /// Time between polling cycles.
    poll_interval: Duration,
    /// Demo feed replacing the HTTP fetch, when enabled.
    demo: Option<DemoFeed>,
    /// When the last successful sample arrived.
    last_update: Option<Instant>,
    /// The last cycle's error, for the status line.
    last_error: Option<String>,
}

impl GrowMon {
    /// Boot the application (called by `iced::application`).
    ///
    /// The poller auto-starts; the first cycle fires one interval later.
    pub fn boot(config: &MonitorConfig, client: DeviceClient, demo: bool) -> (Self, Task<Message>) {
        let mut poller = Poller::new(
            config.device.address.clone(),
            config.device.buffer_capacity,
        );
        if let Err(e) = poller.start() {
            error!("{e}");
        }
        info!(
            address = %poller.address(),
            interval_ms = config.device.poll_interval_ms,
            demo,
            "starting poller"
        );

        let app = Self {
            poller,
            plot: PlotState::new(),
            client,
            poll_interval: Duration::from_millis(config.device.poll_interval_ms),
            demo: demo.then(DemoFeed::new),
            last_update: None,
            last_error: None,
        };

        (app, Task::none())
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PollTick => return self.handle_tick(),

            Message::PollCompleted(result) => {
                match &result {
                    Ok(_) => self.last_error = None,
                    Err(e) => {
                        error!("{e}");
                        self.last_error = Some(e.clone());
                    }
                }

                // The renderer redraws only when the poller accepted the
                // reading; a completion after stop falls through silently.
                if let Some(buffer) = self.poller.complete_cycle(result) {
                    self.plot.set_data(buffer.snapshot());
                    self.last_update = Some(Instant::now());
                }
            }

            Message::StartPoller => match self.poller.start() {
                Ok(()) => info!("starting poller"),
                Err(e) => error!("{e}"),
            },

            Message::StopPoller => match self.poller.stop() {
                Ok(()) => info!("stopping poller"),
                Err(e) => error!("{e}"),
            },

            Message::AddressChanged(address) => {
                self.poller.set_address(address);
            }
        }

        Task::none()
    }

    /// Begin a polling cycle on a timer tick.
    fn handle_tick(&mut self) -> Task<Message> {
        match self.poller.begin_cycle() {
            CycleAction::Issue { address } => {
                if let Some(feed) = &mut self.demo {
                    let reading = feed.next_reading();
                    return Task::done(Message::PollCompleted(Ok(reading)));
                }

                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .fetch_reading(&address)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::PollCompleted,
                )
            }
            CycleAction::Busy => {
                warn!("poller still busy, skipping cycle");
                Task::none()
            }
            CycleAction::Stopped => Task::none(),
        }
    }

    /// The poll timer runs exactly while the poller does. Stopping drops
    /// the subscription without touching an in-flight request.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.poller.is_running() {
            iced::time::every(self.poll_interval).map(|_| Message::PollTick)
        } else {
            Subscription::none()
        }
    }

    /// Render the view: controls row above the plot surface.
    pub fn view(&self) -> Element<'_, Message> {
        let age = self.last_update.map(|at| at.elapsed());

        column![
            controls_view(&self.poller, self.last_error.as_deref(), age),
            plot_view(&self.plot),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}
