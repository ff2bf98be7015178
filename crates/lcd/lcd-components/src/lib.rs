//! Phone LCD UI Components
//!
//! Reusable 1-bit widgets for the simulated phone panel.
//!
//! # Components
//!
//! - `Label` - Text in the three panel sizes (Cyrillic-capable fonts)
//! - `TitleBar` - Centered caption with an underline, used by every list screen
//! - `MenuList` - Icon + label rows with an inverted selection row
//! - `Icon` - Vector-drawn glyphs for the menu entries
//!
//! # Example
//!
//! ```no_run
//! use lcd_components::prelude::*;
//! use embedded_graphics::prelude::*;
//!
//! let label = Label::new("Меню").size(TextSize::Small);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod icon;
pub mod label;
pub mod menu_list;
pub mod title_bar;

pub mod prelude {
    pub use crate::icon::*;
    pub use crate::label::*;
    pub use crate::menu_list::*;
    pub use crate::title_bar::*;
}
