use egui::{Align2, Color32, Context};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_SECS: u64 = 4;

/// Toast notification message
#[derive(Clone, Debug)]
pub struct ToastMessage {
    pub message: String,
    pub expires_at: Instant,
    pub color: Color32,
}

impl ToastMessage {
    /// Create a new toast message
    pub fn new(message: String, color: Color32, duration_secs: u64) -> Self {
        Self {
            message,
            expires_at: Instant::now() + Duration::from_secs(duration_secs),
            color,
        }
    }

    /// Check if the toast message has expired
    pub fn has_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// Stack of pending toasts, newest last
#[derive(Default, Debug)]
pub struct Toasts {
    messages: Vec<ToastMessage>,
}

impl Toasts {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message.into(), Color32::GREEN);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(message.into(), Color32::YELLOW);
    }

    /// Show an error; it is logged as well
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.push(message, Color32::RED);
    }

    fn push(&mut self, message: String, color: Color32) {
        self.messages.push(ToastMessage::new(message, color, TOAST_SECS));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop expired toasts and draw the rest stacked from the top centre
    pub fn show(&mut self, ctx: &Context) {
        self.messages.retain(|toast| !toast.has_expired());
        if self.is_empty() {
            return;
        }

        let available_rect = ctx.available_rect();
        let spacing = available_rect.height() * 0.08;
        let toast_offset = 44.0;

        for (i, toast) in self.messages.iter().enumerate() {
            let pos = [0.0, spacing + i as f32 * toast_offset];
            egui::Window::new("Toast")
                .id(egui::Id::new("toast_message").with(i))
                .title_bar(false)
                .resizable(false)
                .movable(false)
                .anchor(Align2::CENTER_TOP, pos)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.colored_label(toast.color, &toast.message);
                    });
                });
        }

        // Keep repainting so expired toasts disappear without user input.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
