// src/ui/uploads.rs
//! Upload areas: click-to-pick, drag and drop, and the rendered file list.

use tracing::{debug, trace};

use super::controller::UiController;
use super::events::Command;
use super::page::UploadArea;
use super::templates;
use crate::types::{FileSelection, SelectedFile};

impl UiController {
    fn bound_area_mut(&mut self, id: &str) -> Option<&mut UploadArea> {
        let area = self
            .page
            .upload_area_mut(id)
            .filter(|area| area.input_name.is_some());
        if area.is_none() {
            trace!("Upload area {} is not bound", id);
        }
        area
    }

    pub(crate) fn upload_area_clicked(&mut self, id: &str) -> Vec<Command> {
        match self.bound_area_mut(id) {
            Some(area) => vec![Command::OpenFilePicker {
                area: area.id.clone(),
            }],
            None => Vec::new(),
        }
    }

    pub(crate) fn set_dragover(&mut self, id: &str, dragover: bool) {
        if let Some(area) = self.bound_area_mut(id) {
            area.dragover = dragover;
        }
    }

    /// Files dropped on an area replace the input's selection
    pub(crate) fn drop_files(&mut self, id: &str, files: Vec<SelectedFile>) {
        let Some(area) = self.bound_area_mut(id) else {
            return;
        };
        area.dragover = false;

        if files.is_empty() {
            return;
        }

        debug!("{} file(s) dropped on {}", files.len(), id);
        area.files = FileSelection::new(files);
        render_file_list(area);
        refresh_name_display(area);
    }

    pub(crate) fn files_changed(&mut self, id: &str, files: Vec<SelectedFile>) {
        let Some(area) = self.bound_area_mut(id) else {
            return;
        };

        area.files = FileSelection::new(files);
        refresh_name_display(area);
        render_file_list(area);
    }

    /// Clear the file inputs of `form` and show the empty list
    pub(crate) fn reset_uploads(&mut self, form: &str) {
        for area in self
            .page
            .upload_areas
            .iter_mut()
            .filter(|area| area.form.as_deref() == Some(form))
        {
            area.files.clear();
            render_file_list(area);
        }
    }
}

fn render_file_list(area: &mut UploadArea) {
    if let Some(list) = area.file_list.as_mut() {
        *list = templates::file_list(&area.files);
    }
}

fn refresh_name_display(area: &mut UploadArea) {
    if let Some(display) = area.name_display.as_mut() {
        *display = area.files.summary();
    }
}
