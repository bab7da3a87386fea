use egui::color_picker::{Alpha, color_picker_color32};

use crate::SketchApp;
use crate::app::{AppState, FileAction};

/// Blocking canvas size prompt shown before the session exists
pub fn setup_prompt(app: &mut SketchApp, ctx: &egui::Context) {
    let mut submitted = None;
    let mut cancelled = false;

    egui::CentralPanel::default().show(ctx, |_ui| {});
    egui::Window::new("Set Canvas Size")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let AppState::Setup { width, height } = &mut app.state else {
                return;
            };
            ui.label("Width:");
            ui.text_edit_singleline(width);
            ui.label("Height:");
            ui.text_edit_singleline(height);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    submitted = Some((width.clone(), height.clone()));
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if let Some((width, height)) = submitted {
        app.finish_setup(&width, &height);
    } else if cancelled {
        log::info!("Canvas size prompt cancelled");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

pub fn setup_failed(app: &mut SketchApp, ctx: &egui::Context) {
    let AppState::Failed(message) = &app.state else {
        return;
    };
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Could not start the session");
        ui.label(message.as_str());
        if ui.button("Quit").clicked() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Message, file path and color windows layered over the canvas
pub fn dialogs(app: &mut SketchApp, ctx: &egui::Context) {
    notice_window(app, ctx);
    file_prompt_window(app, ctx);
    color_window(app, ctx);
}

fn notice_window(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(notice) = &app.ui.notice else {
        return;
    };
    let mut close = false;
    egui::Window::new(notice.title.as_str())
        .collapsible(false)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                ui.label(notice.body.as_str());
            });
            close = ui.button("OK").clicked();
        });
    if close {
        app.ui.notice = None;
    }
}

fn file_prompt_window(app: &mut SketchApp, ctx: &egui::Context) {
    let Some((action, path)) = &mut app.ui.file_prompt else {
        return;
    };
    let action = *action;
    let title = match action {
        FileAction::Open => "Open Image",
        FileAction::Save => "Save Image",
    };
    let mut submit = false;
    let mut cancel = false;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(match action {
                FileAction::Open => "Images (*.png *.jpg *.bmp *.gif)",
                FileAction::Save => "PNG Files (*.png)",
            });
            let field = ui.text_edit_singleline(path);
            let entered = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                submit = ui.button("OK").clicked() || entered;
                cancel = ui.button("Cancel").clicked();
            });
        });

    if submit {
        if let Some((action, path)) = app.ui.file_prompt.take() {
            app.submit_file_prompt(action, &path);
        }
    } else if cancel {
        app.ui.file_prompt = None;
    }
}

fn color_window(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(color) = &mut app.ui.color_prompt else {
        return;
    };
    let mut accepted = None;
    let mut cancel = false;
    egui::Window::new("Select Color")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            color_picker_color32(ui, color, Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    accepted = Some(*color);
                }
                cancel = ui.button("Cancel").clicked();
            });
        });

    if accepted.is_some() || cancel {
        app.ui.color_prompt = None;
        // A cancelled picker leaves the pen color unchanged
        app.run(|session| session.set_color(accepted));
    }
}
