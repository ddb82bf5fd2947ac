pub mod common;
pub mod extract;
pub mod logger;
pub mod ocr;
pub mod preprocess;
pub mod scan;
pub mod worker;
