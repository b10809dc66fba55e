pub mod faq;

pub use faq::PostgresFaqRepository;
