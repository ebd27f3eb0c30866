pub mod registrar;

pub use crate::domain::model::{AppendOutcome, RegistrationFile, RegistrationPreview};
pub use crate::domain::ports::{ProjectModel, Storage};
pub use crate::utils::error::Result;
