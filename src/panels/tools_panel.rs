use crate::command::RedoPolicy;
use crate::components::ToolButton;
use crate::tool::Tool;
use crate::SketchpadApp;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Markers");
            ui.label(format!("Active tool: {}", app.session().tools().tool().name()));
            ui.horizontal(|ui| {
                let tool = app.session().tools().tool().clone();
                let glyph = app.session().tools().cursor_glyph();

                let thin_icon = if tool == Tool::ThinMarker { "⏺" } else { "￮" };
                if ToolButton::new(thin_icon, tool == Tool::ThinMarker).show(ui).clicked() {
                    app.session_mut().select_thin_marker();
                }

                let thick_icon = if tool == Tool::ThickMarker { glyph.symbol() } else { "◯" };
                if ToolButton::new(thick_icon, tool == Tool::ThickMarker).show(ui).clicked() {
                    let color = app.session_mut().select_thick_marker();
                    log::info!("Thick marker color: {}", color.name);
                }
            });

            ui.separator();
            ui.heading("Stickers");
            let symbols: Vec<String> = app
                .session()
                .stickers()
                .iter()
                .map(|sticker| sticker.symbol.clone())
                .collect();
            ui.horizontal_wrapped(|ui| {
                for symbol in &symbols {
                    let selected = matches!(app.session().tools().tool(), Tool::Sticker(s) if s == symbol);
                    if ToolButton::new(symbol, selected).show(ui).clicked() {
                        app.session_mut().select_sticker(symbol.clone());
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(app.custom_sticker_text_mut())
                        .desired_width(80.0)
                        .hint_text("Custom sticker text"),
                );
                if ui.button("Custom sticker").clicked() {
                    let symbol = app.custom_sticker_text_mut().clone();
                    app.session_mut().add_custom_sticker(symbol);
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
                if ui.button("Clear canvas").clicked() {
                    app.session_mut().clear();
                }
            });

            if ui.button("Export").clicked() {
                app.export();
            }

            let mut keep_redo = app.session().redo_policy() == RedoPolicy::Preserve;
            if ui
                .checkbox(&mut keep_redo, "Keep redo after new strokes")
                .changed()
            {
                let policy = if keep_redo {
                    RedoPolicy::Preserve
                } else {
                    RedoPolicy::DiscardOnCommit
                };
                app.session_mut().set_redo_policy(policy);
            }

            ui.separator();
            ui.checkbox(app.show_history_mut(), "Show history");
            if app.show_history() {
                history_grid(app, ui);
            }
        });
}

fn history_grid(app: &SketchpadApp, ui: &mut egui::Ui) {
    let history = app.session().history();
    ui.horizontal(|ui| {
        ui.label(format!("Committed: {}", history.committed().len()));
        ui.label(format!("Undone: {}", history.undone().len()));
    });

    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Committed");
            ui.strong("Undone");
            ui.end_row();

            let committed = history.committed();
            let undone = history.undone();
            let max_len = committed.len().max(undone.len());

            for i in 0..max_len {
                ui.label(committed.get(i).map(|e| e.command.label()).unwrap_or_default());
                ui.label(undone.get(i).map(|e| e.command.label()).unwrap_or_default());
                ui.end_row();
            }
        });
}
