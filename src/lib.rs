pub mod config;
pub mod logger;
pub mod front_matter;
pub mod post;
pub mod post_list;
pub mod validation;
pub mod report;
pub mod checker;
pub mod text_utils;
pub mod util;
mod test_data;
