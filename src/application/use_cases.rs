pub mod add_artwork;
pub mod load_gallery;
pub mod remove_artwork;
pub mod run_application;
pub mod send_contact_message;

pub use add_artwork::{AddArtworkUseCase, UploadPhase};
pub use load_gallery::LoadGalleryUseCase;
pub use remove_artwork::RemoveArtworkUseCase;
pub use run_application::RunApplicationUseCase;
pub use send_contact_message::SendContactMessageUseCase;
