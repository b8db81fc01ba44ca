mod composite_file_loader;
mod mock_file_loader;
mod pdf_adapter;
mod udf_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use mock_file_loader::MockFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use udf_adapter::UdfAdapter;
