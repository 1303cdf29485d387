//! Half sheet demo application
//!
//! A minimal host app showing the sheet in two flavors: the default
//! card with a close button, and a locked, undecorated panel that can
//! only be dismissed from its own content. Style overrides are read
//! from ~/.config/half-sheet-demo/half-sheet.yaml if present.

use half_sheet::{
    default_style_path, half_sheet, load_sheet_style, SheetEvent, SheetMessage, SheetState,
    SheetStyle,
};
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Color, Element, Length, Task, Theme};

const APP_NAME: &str = "half-sheet-demo";

/// Which sheet variant is being presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    /// Configured style + close button, drag to dismiss
    Card,
    /// Flat, no close button, drag dismiss disabled
    Locked,
}

struct DemoApp {
    /// Style loaded from the config file at startup
    base_style: SheetStyle,
    /// Style in effect for the currently presented sheet
    style: SheetStyle,
    /// Presented flag, owned here and only here
    sheet_open: bool,
    /// Transient drag state
    sheet: SheetState,
    /// How many times a sheet has been dismissed
    dismissals: u32,
}

#[derive(Debug, Clone)]
enum Message {
    OpenSheet(Variant),
    Sheet(SheetMessage),
    /// Dismiss button inside the locked sheet's content
    CloseLocked,
}

impl DemoApp {
    fn new() -> (Self, Task<Message>) {
        let base_style = load_sheet_style(&default_style_path(APP_NAME));

        (
            Self {
                style: base_style.clone(),
                base_style,
                sheet_open: false,
                sheet: SheetState::new(),
                dismissals: 0,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSheet(variant) => {
                self.style = match variant {
                    Variant::Card => self.base_style.clone().with_close_button(),
                    Variant::Locked => SheetStyle {
                        disable_drag_dismiss: true,
                        disable_card: true,
                        ..self.base_style.clone()
                    },
                };
                self.sheet_open = true;
                self.sheet.open();
                log::info!("presenting {:?} sheet", variant);
            }
            Message::Sheet(msg) => {
                if let Some(SheetEvent::Dismissed) = self.sheet.update(msg, &self.style) {
                    self.sheet_open = false;
                    self.dismissals += 1;
                }
            }
            Message::CloseLocked => {
                if let Some(SheetEvent::Dismissed) =
                    self.sheet.update(SheetMessage::CloseRequested, &self.style)
                {
                    self.sheet_open = false;
                    self.dismissals += 1;
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let base = container(
            column![
                text("Half Sheet Demo").size(28),
                text(format!("sheets dismissed so far: {}", self.dismissals)).size(14),
                Space::new().height(Length::Fixed(24.0)),
                button(text("Show card sheet")).on_press(Message::OpenSheet(Variant::Card)),
                button(text("Show locked sheet")).on_press(Message::OpenSheet(Variant::Locked)),
            ]
            .spacing(12)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        half_sheet(
            base.into(),
            self.sheet_open,
            &self.sheet,
            &self.style,
            || self.sheet_content(),
            Message::Sheet,
        )
    }

    fn sheet_content(&self) -> Element<'_, Message> {
        let dark_text = Color::from_rgb(0.1, 0.1, 0.12);

        if self.style.disable_drag_dismiss {
            column![
                text("Locked sheet").size(20).color(dark_text),
                text("Dragging is disabled; this one only closes from here.")
                    .size(14)
                    .color(dark_text),
                button(text("Close")).on_press(Message::CloseLocked),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
        } else {
            column![
                text("Card sheet").size(20).color(dark_text),
                text("Drag the card down past the threshold to dismiss it,")
                    .size(14)
                    .color(dark_text),
                text("or use the close button in the corner.")
                    .size(14)
                    .color(dark_text),
            ]
            .spacing(12)
            .align_x(Alignment::Center)
            .into()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn title(_app: &DemoApp) -> String {
    String::from("half-sheet demo")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("half-sheet-demo starting up");

    iced::application(DemoApp::new, DemoApp::update, DemoApp::view)
        .title(title)
        .window_size(iced::Size::new(480.0, 760.0))
        .theme(DemoApp::theme)
        .run()
}
