pub mod about;
pub mod contact;
pub mod hero;
pub mod jobs;
pub mod projects;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use jobs::Jobs;
pub use projects::Projects;
