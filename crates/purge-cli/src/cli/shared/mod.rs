use super::*;

mod io_render;
mod messages;
mod prompts;
mod reporter;

pub(in crate::cli) use io_render::*;
pub(in crate::cli) use messages::*;
pub(in crate::cli) use prompts::*;
pub(in crate::cli) use reporter::*;
