//! Control panel modal: edit every section of the résumé in place.

use eframe::egui;

use resume_carousel::content::editor::{EditorDraft, EditorTab};

use super::ResumeApp;

/// What the footer buttons asked for.
enum EditorAction {
    None,
    Save,
    Cancel,
}

impl ResumeApp {
    /// Render the control panel when open.
    pub fn draw_editor(&mut self, ctx: &egui::Context) {
        let Some(draft) = self.editor.as_mut() else {
            return;
        };
        let mut open = true;
        let mut action = EditorAction::None;

        egui::Window::new("Control panel")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([560.0, 520.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for tab in EditorTab::ALL {
                        if ui.selectable_label(draft.tab == tab, tab.label()).clicked() {
                            draft.switch_tab(tab);
                        }
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .max_height(400.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| match draft.tab {
                        EditorTab::Header => header_form(ui, draft),
                        EditorTab::Summary => summary_form(ui, draft),
                        EditorTab::Experience => experience_form(ui, draft),
                        EditorTab::Skills => skills_form(ui, draft),
                        EditorTab::Education => education_form(ui, draft),
                    });

                if let Some(err) = &self.editor_error {
                    ui.colored_label(egui::Color32::from_rgb(220, 80, 80), err);
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = EditorAction::Save;
                    }
                    if ui.button("Cancel").clicked() {
                        action = EditorAction::Cancel;
                    }
                });
            });

        if !open {
            action = EditorAction::Cancel;
        }
        match action {
            EditorAction::None => {}
            EditorAction::Cancel => {
                self.editor = None;
                self.editor_error = None;
            }
            EditorAction::Save => self.save_editor(),
        }
    }

    /// Commit the draft. Validation errors keep the modal open.
    fn save_editor(&mut self) {
        let (Some(draft), Some(live)) = (&self.editor, &self.content) else {
            return;
        };
        match draft.commit(live) {
            Ok(model) => {
                log::info!("Content updated from control panel");
                self.editor = None;
                self.editor_error = None;
                self.apply_content(model);
            }
            Err(e) => {
                log::warn!("Rejected edit: {}", e);
                self.editor_error = Some(e.to_string());
            }
        }
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
}

fn area(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
}

fn header_form(ui: &mut egui::Ui, draft: &mut EditorDraft) {
    field(ui, "Name", &mut draft.name);
    field(ui, "Title", &mut draft.title);
    field(ui, "Email", &mut draft.email);
    field(ui, "Phone", &mut draft.phone);
    field(ui, "LinkedIn", &mut draft.linkedin);
    field(ui, "GitHub", &mut draft.github);
    field(ui, "Portfolio", &mut draft.portfolio);
}

fn summary_form(ui: &mut egui::Ui, draft: &mut EditorDraft) {
    area(ui, "Summary", "", &mut draft.summary_text);
    area(ui, "Achievements", "One per line", &mut draft.achievements);
}

fn experience_form(ui: &mut egui::Ui, draft: &mut EditorDraft) {
    let mut remove = None;
    for job in &mut draft.jobs {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("#{}", job.id));
                if ui.small_button("Remove").clicked() {
                    remove = Some(job.id);
                }
            });
            field(ui, "Title", &mut job.title);
            field(ui, "Company", &mut job.company);
            field(ui, "Location", &mut job.location);
            field(ui, "Years", &mut job.years);
            area(ui, "Details", "One per line", &mut job.details);
        });
        ui.add_space(4.0);
    }
    if let Some(id) = remove {
        draft.remove_job(id);
    }
    if ui.button("+ Add experience").clicked() {
        draft.add_job();
    }
}

fn skills_form(ui: &mut egui::Ui, draft: &mut EditorDraft) {
    area(
        ui,
        "Skills",
        "Category: item, item | Category: item",
        &mut draft.skills_raw,
    );
}

fn education_form(ui: &mut egui::Ui, draft: &mut EditorDraft) {
    field(ui, "Degree", &mut draft.edu_degree);
    field(ui, "Institution", &mut draft.edu_institution);
    field(ui, "Years", &mut draft.edu_years);
    area(ui, "Details", "", &mut draft.edu_details);
}
