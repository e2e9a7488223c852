//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::application::handlers::{
    AddCurriculumItemHandler, AttachContentHandler, DeleteCurriculumItemHandler,
    ExportCurriculumHandler, GetCurriculumHandler, GetProgressHandler, ImportCurriculumHandler,
    RemoveContentHandler, SetItemStatusHandler, StartProgressHandler, UpdateCurriculumItemHandler,
};
use crate::ports::{ProgramRepository, ProgressRepository};

/// Dependencies shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub program_repository: Arc<dyn ProgramRepository>,
    pub progress_repository: Arc<dyn ProgressRepository>,
}

impl AppState {
    pub fn new(
        program_repository: Arc<dyn ProgramRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            program_repository,
            progress_repository,
        }
    }

    pub fn add_item_handler(&self) -> AddCurriculumItemHandler {
        AddCurriculumItemHandler::new(self.program_repository.clone())
    }

    pub fn update_item_handler(&self) -> UpdateCurriculumItemHandler {
        UpdateCurriculumItemHandler::new(self.program_repository.clone())
    }

    pub fn delete_item_handler(&self) -> DeleteCurriculumItemHandler {
        DeleteCurriculumItemHandler::new(self.program_repository.clone())
    }

    pub fn attach_content_handler(&self) -> AttachContentHandler {
        AttachContentHandler::new(self.program_repository.clone())
    }

    pub fn remove_content_handler(&self) -> RemoveContentHandler {
        RemoveContentHandler::new(self.program_repository.clone())
    }

    pub fn get_curriculum_handler(&self) -> GetCurriculumHandler {
        GetCurriculumHandler::new(self.program_repository.clone())
    }

    pub fn export_handler(&self) -> ExportCurriculumHandler {
        ExportCurriculumHandler::new(self.program_repository.clone())
    }

    pub fn import_handler(&self) -> ImportCurriculumHandler {
        ImportCurriculumHandler::new(self.program_repository.clone())
    }

    pub fn start_progress_handler(&self) -> StartProgressHandler {
        StartProgressHandler::new(
            self.program_repository.clone(),
            self.progress_repository.clone(),
        )
    }

    pub fn set_item_status_handler(&self) -> SetItemStatusHandler {
        SetItemStatusHandler::new(self.progress_repository.clone())
    }

    pub fn get_progress_handler(&self) -> GetProgressHandler {
        GetProgressHandler::new(self.progress_repository.clone())
    }
}
