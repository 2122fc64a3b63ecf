//! Small styled building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{FieldError, Input, Label, Select};

mod pill;
pub use pill::{Pill, PillTone};
