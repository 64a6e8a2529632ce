// Reusable UI widgets

pub mod menu;
pub mod toast;

pub use menu::{Menu, MenuItem, MenuState};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
