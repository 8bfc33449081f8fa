use eframe::egui;

use resume_carousel::AppConfig;

mod app;
mod ui;

use app::ResumeApp;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "Starting résumé carousel (gap {}, content {})",
        config.panel_gap,
        config
            .content_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".into())
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Résumé",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(ResumeApp::new(cc, config)))
        }),
    )
}

impl eframe::App for ResumeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_content();
        self.check_avatar(ctx);
        self.handle_keys(ctx);

        if self.carousel.navigator().visibility().chrome {
            egui::TopBottomPanel::top("header").show(ctx, |ui| {
                ui.add_space(6.0);
                self.draw_header(ui);
                ui.add_space(4.0);
                self.draw_toolbar(ui);
                ui.add_space(4.0);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_stage(ui));

        self.draw_editor(ctx);
        self.draw_image_modal(ctx);

        // Continuous render loop: the camera eases every frame.
        ctx.request_repaint();
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}
