mod builder_vm;
mod presenter_vm;

pub use builder_vm::{list_item_label, parse_sequence_number};
pub use presenter_vm::{format_seconds, option_class, progress_percent, status_text};
