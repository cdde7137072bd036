//! Small styled building blocks shared by every view.

mod button;
mod field;
mod status;

pub use button::{Button, ButtonVariant};
pub use field::{FieldError, Label, TextArea, TextInput};
pub use status::{EmptyMessage, LoadError, Spinner};
