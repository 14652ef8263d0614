pub mod busy_button;
pub mod confirmation_view;
pub mod field;
pub mod footer;
pub mod header;
pub mod modal;
pub mod options;
pub mod passenger_table;
pub mod quote_panel;
pub mod toast;
