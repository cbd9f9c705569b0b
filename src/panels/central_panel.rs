use crate::SketchpadApp;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let size = app.config().canvas_size;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(size, size), egui::Sense::drag());
        let canvas_rect = response.rect;

        // The cursor preview stands in for the system pointer
        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        app.handle_input(ctx, canvas_rect);
        app.renderer().render(&painter, canvas_rect, app.session());

        if let Some(status) = app.status() {
            ui.label(status);
        }
    });
}
