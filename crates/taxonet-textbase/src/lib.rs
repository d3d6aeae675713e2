//! Textbase parsing — notation records and label files

pub mod index;
pub mod labels;
pub mod record;


pub use index::{NotationIndex, CHILDREN_TAG, NOTATION_TAG};
pub use labels::LabelIndex;
pub use record::{parse_records, parse_textbase, Record};
