//! Pages
//!
//! Top-level route views.

pub mod blog;
pub mod blog_editor;
pub mod blog_post;
pub mod dashboard;
pub mod document_viewer;
pub mod documents;
pub mod home;
pub mod login;
pub mod pricing;
pub mod signup;
pub mod solutions;

pub use blog::Blog;
pub use blog_editor::BlogEditor;
pub use blog_post::BlogPostPage;
pub use dashboard::Dashboard;
pub use document_viewer::DocumentViewer;
pub use documents::Documents;
pub use home::Home;
pub use login::Login;
pub use pricing::Pricing;
pub use signup::Signup;
pub use solutions::Solutions;
