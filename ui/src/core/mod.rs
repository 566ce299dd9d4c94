//! Page state that is independent of rendering: the active language, the
//! carousel counter and the state cell the page component owns.

pub mod carousel;
pub mod language;
pub mod state;
