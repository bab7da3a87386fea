use crate::SketchApp;
use crate::app::FileAction;
use crate::tool::{BrushVariant, ShapeMode};

pub fn toolbar(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(session) = app.session() else {
        return;
    };
    let tools = session.tools().clone();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let size_field = ui.add(
                egui::TextEdit::singleline(&mut app.ui.size_text)
                    .hint_text("Size (1-256)")
                    .char_limit(3)
                    .desired_width(100.0),
            );
            if size_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let text = app.ui.size_text.clone();
                app.run(|session| session.change_size(&text));
            }

            // Selectors show display names; variants are resolved right here
            let mut brush_label = tools.brush().label();
            egui::ComboBox::from_id_salt("brush_selector")
                .selected_text(brush_label)
                .show_ui(ui, |ui| {
                    for brush in tools.profile().brushes() {
                        ui.selectable_value(&mut brush_label, brush.label(), brush.label());
                    }
                });
            if let Some(brush) = BrushVariant::from_label(brush_label) {
                app.run(|session| session.set_brush(brush));
            }

            let mut shape_label = tools.shape().label();
            egui::ComboBox::from_id_salt("shape_selector")
                .selected_text(shape_label)
                .show_ui(ui, |ui| {
                    for shape in tools.profile().shapes() {
                        ui.selectable_value(&mut shape_label, shape.label(), shape.label());
                    }
                });
            if let Some(shape) = ShapeMode::from_label(shape_label) {
                app.run(|session| session.set_shape(shape));
            }

            ui.separator();

            if ui.button("Open").clicked() {
                app.ui.file_prompt = Some((FileAction::Open, String::new()));
            }
            if ui.button("Save").clicked() {
                app.ui.file_prompt = Some((FileAction::Save, String::new()));
            }
            if ui.button("Clear").clicked() {
                app.run(|session| session.clear());
            }
            if ui.button("Color").clicked() {
                app.ui.color_prompt = Some(tools.color());
            }
            if ui.button("Show History").clicked() {
                app.show_history();
            }
            if ui.button("Undo").clicked() {
                app.undo();
            }
        });
    });
}
