pub mod combobox;
pub mod event_form;
pub mod grid;
pub mod lookup;
pub mod month;
pub mod relay;
pub mod stats;
