use iced::widget::image::Handle;
use iced::widget::{column, text};
use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod fetch;
mod state;
mod ui;

use fetch::grab::{FetchResult, Grabber};
use state::session::{self, Event, Outcome, Session, Shot};

/// Main application state
struct Snapgrab {
    /// Session state machine; written only through the reducer
    session: Session,
    /// Stateless fetcher, kept around for its connection pool
    grabber: Grabber,
    /// Render handle derived from the session shot at each transition point
    preview: Option<Handle>,
    /// Shown before the first fetch and after a failed one
    placeholder: Handle,
    /// Status message to display to the user
    status: String,
    /// Handle to the in-flight fetch. Nothing aborts it yet; it exists so a
    /// timeout policy can be added without redesign.
    fetch_handle: Option<iced::task::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the fetch trigger
    FetchPressed,
    /// Background fetch completed
    FetchComplete(Result<FetchResult, String>),
    /// User clicked the source URL
    CopyUrl,
    /// User clicked the save action
    SavePressed,
    /// Background PNG export completed
    SaveComplete(Result<String, String>),
}

impl Snapgrab {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (
            Snapgrab {
                session: Session::default(),
                grabber: Grabber::new(),
                preview: None,
                placeholder: ui::viewer::placeholder_handle(),
                status: String::from("Ready. Grab a screenshot to get started."),
                fetch_handle: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchPressed => {
                let (session, outcome) =
                    session::reduce(std::mem::take(&mut self.session), Event::TriggerPressed);
                self.session = session;

                if outcome != Outcome::StartFetch {
                    // Rejected: a fetch is already in flight.
                    return Task::none();
                }

                self.status = String::from("Fetching a random screenshot...");

                let grabber = self.grabber.clone();
                let (task, handle) = Task::perform(
                    async move { grabber.fetch_random().await.map_err(|e| e.to_string()) },
                    Message::FetchComplete,
                )
                .abortable();

                self.fetch_handle = Some(handle);
                task
            }
            Message::FetchComplete(result) => {
                // The fetch finished on its own; release its handle.
                drop(self.fetch_handle.take());

                match result {
                    Ok(result) => {
                        let rgba = result.image.to_rgba8();
                        let (width, height) = rgba.dimensions();
                        self.preview = Some(Handle::from_rgba(width, height, rgba.into_raw()));
                        self.status = format!(
                            "Showing {} ({} KB)",
                            result.source_url,
                            result.image_bytes.len() / 1024
                        );
                        println!("🖼️  Fetched {} ({}x{})", result.source_url, width, height);

                        let shot = Shot {
                            source_url: result.source_url,
                            image: result.image,
                        };
                        let (session, _) = session::reduce(
                            std::mem::take(&mut self.session),
                            Event::FetchSucceeded(shot),
                        );
                        self.session = session;
                    }
                    Err(err) => {
                        // Every failure kind collapses into the same
                        // user-visible outcome; the detail is console-only.
                        eprintln!("⚠️  Fetch failed: {}", err);
                        self.preview = None;
                        self.status = String::from("Nothing there. Grab again!");

                        let (session, _) = session::reduce(
                            std::mem::take(&mut self.session),
                            Event::FetchFailed,
                        );
                        self.session = session;
                    }
                }

                Task::none()
            }
            Message::CopyUrl => {
                let Some(shot) = &self.session.shot else {
                    return Task::none();
                };

                self.status = format!("Copied {}", shot.source_url);
                iced::clipboard::write(shot.source_url.clone())
            }
            Message::SavePressed => {
                let Some(shot) = &self.session.shot else {
                    return Task::none();
                };

                // Show the native save dialog
                let file = FileDialog::new()
                    .set_title("Save screenshot as PNG")
                    .set_file_name("screenshot.png")
                    .save_file();

                if let Some(path) = file {
                    let image = shot.image.clone();
                    return Task::perform(save_png(image, path), Message::SaveComplete);
                }

                Task::none()
            }
            Message::SaveComplete(result) => {
                match result {
                    Ok(path) => {
                        println!("💾 Saved screenshot to {}", path);
                        self.status = format!("Saved to {}", path);
                    }
                    Err(err) => {
                        eprintln!("⚠️  Save failed: {}", err);
                        self.status = String::from("Could not save the screenshot.");
                    }
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let toolbar = ui::toolbar::view(
            self.session.phase,
            self.session.shot.as_ref().map(|s| s.source_url.as_str()),
        );

        let handle = self.preview.as_ref().unwrap_or(&self.placeholder);
        let viewer = ui::viewer::view(handle, self.session.shot.is_some());

        column![toolbar, viewer, text(&self.status).size(14)]
            .spacing(10)
            .padding(16)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Snapgrab", Snapgrab::update, Snapgrab::view)
        .theme(Snapgrab::theme)
        .centered()
        .run_with(Snapgrab::new)
}

/// Encode the current shot as PNG and write it to the chosen path.
/// Runs on a blocking task because PNG encoding is CPU-bound.
async fn save_png(image: image::DynamicImage, path: PathBuf) -> Result<String, String> {
    tokio::task::spawn_blocking(move || {
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| format!("Failed to write PNG: {}", e))?;

        Ok(path.display().to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}
