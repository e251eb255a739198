//! CLI command implementations

pub mod dev;
pub mod new;
pub mod pages;
pub mod publish;
pub mod save;
pub mod templates;

pub use dev::DevCommand;
pub use new::NewCommand;
pub use pages::PagesCommand;
pub use publish::PublishCommand;
pub use save::SaveCommand;
pub use templates::TemplatesCommand;
