pub mod checkbox;
pub mod date_input;
pub mod select;
pub mod textarea;

pub use checkbox::CheckboxField;
pub use date_input::DateField;
pub use select::SelectField;
pub use textarea::TextareaField;
